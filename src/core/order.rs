use crate::domain::model::Achievement;

/// Returns a copy ordered by display order. Ties keep their fetch order.
pub fn sorted_by_display_order(achievements: &[Achievement]) -> Vec<Achievement> {
    let mut sorted = achievements.to_vec();
    // `sort_by_key` is stable.
    sorted.sort_by_key(|a| a.display_order);
    sorted
}
