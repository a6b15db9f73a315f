//! UI domain: tests for HUD text.

use super::hud_lives::lives_label;
use crate::trail::Lives;

#[test]
fn test_lives_label() {
    assert_eq!(lives_label(&Lives::new(3, 5)), "Ducklings: 3/5");
    assert_eq!(lives_label(&Lives::new(0, 5)), "Ducklings: 0/5");
}

#[test]
fn test_lives_label_with_full_trail() {
    assert_eq!(lives_label(&Lives::new(5, 5)), "Ducklings: 5/5");
}
