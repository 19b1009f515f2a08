use crate::models::HallOfFamer;

/// Inductees whose name contains `query` (case-insensitive) and, when
/// given, who were inducted in `year`.
pub fn filter_members<'a>(
    members: &'a [HallOfFamer],
    query: &str,
    year: Option<i32>,
) -> Vec<&'a HallOfFamer> {
    let needle = query.trim().to_lowercase();
    members
        .iter()
        .filter(|m| needle.is_empty() || m.player_name.to_lowercase().contains(&needle))
        .filter(|m| year.is_none_or(|y| m.induction_year == y))
        .collect()
}

/// Induction classes, newest first. Order inside a class is preserved.
pub fn group_by_year<'a>(members: &[&'a HallOfFamer]) -> Vec<(i32, Vec<&'a HallOfFamer>)> {
    let mut classes: Vec<(i32, Vec<&'a HallOfFamer>)> = Vec::new();
    for &member in members {
        match classes.iter_mut().find(|(y, _)| *y == member.induction_year) {
            Some((_, class)) => class.push(member),
            None => classes.push((member.induction_year, vec![member])),
        }
    }
    classes.sort_by(|(a, _), (b, _)| b.cmp(a));
    classes
}

pub fn induction_years(members: &[HallOfFamer]) -> Vec<i32> {
    let mut years: Vec<i32> = members.iter().map(|m| m.induction_year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}
