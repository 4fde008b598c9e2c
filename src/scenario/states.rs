//! Incentive programs available in each state

/// Incentive numbers a biorefinery in `state` qualifies for
///
/// States without a modeled program return an empty slice.
pub fn state_incentives(state: &str) -> &'static [u8] {
    match state {
        "Alabama" => &[8, 9],
        "Colorado" => &[10],
        "Hawaii" => &[11],
        "Iowa" => &[1, 12],
        "Kansas" => &[2],
        "Kentucky" => &[13, 14],
        "Louisiana" => &[15],
        "Michigan" => &[3],
        "Montana" => &[4],
        "Nebraska" => &[5],
        "New Mexico" => &[7],
        "Oregon" => &[6],
        "South Carolina" => &[16, 17],
        "Utah" => &[18],
        "Virginia" => &[19],
        _ => &[],
    }
}

/// States with at least one modeled incentive program
pub const STATES_WITH_INCENTIVES: [&str; 15] = [
    "Alabama",
    "Colorado",
    "Hawaii",
    "Iowa",
    "Kansas",
    "Kentucky",
    "Louisiana",
    "Michigan",
    "Montana",
    "Nebraska",
    "New Mexico",
    "Oregon",
    "South Carolina",
    "Utah",
    "Virginia",
];
