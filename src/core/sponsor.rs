use crate::models::Profile;

/// Pick the profile that earns first placement in the results
///
/// Only records that are both nearby and good compete. The first such record
/// becomes the initial pick; a later one replaces it only with a strictly
/// higher ad level, so ties go to the earliest record.
///
/// # Returns
/// Index into `profiles`, or `None` when nothing qualifies
pub fn select_sponsor(profiles: &[Profile]) -> Option<usize> {
    profiles
        .iter()
        .enumerate()
        .filter(|(_, profile)| profile.qualifies())
        .fold(None, |best: Option<(usize, &Profile)>, (index, profile)| match best {
            Some((kept, current)) if profile.ad_level <= current.ad_level => Some((kept, current)),
            _ => Some((index, profile)),
        })
        .map(|(index, _)| index)
}
