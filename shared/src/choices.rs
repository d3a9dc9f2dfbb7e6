use rand::Rng;
use serde::{Deserialize, Serialize};
use validator::ValidationError;

use crate::constants::DEFAULT_CHOICES;
use crate::validation::validate_choice;

/// The user's ordered list of decisions. May be empty.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChoiceList {
    items: Vec<String>,
}

impl Default for ChoiceList {
    fn default() -> Self {
        Self {
            items: DEFAULT_CHOICES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl ChoiceList {
    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Appends a trimmed choice, returning its index.
    pub fn add(&mut self, text: &str) -> Result<usize, ValidationError> {
        let choice = validate_choice(text)?;
        self.items.push(choice);
        Ok(self.items.len() - 1)
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::thread_rng());
    }

    /// Fisher-Yates, walking down from the last item.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.items.len()).rev() {
            let j = rng.gen_range(0..=i);
            self.items.swap(i, j);
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_defaults() {
        assert_eq!(ChoiceList::default().as_slice(), &["Yes", "No", "Maybe"]);
        assert!(ChoiceList::empty().is_empty());
    }

    #[test]
    fn test_add_trims_and_rejects_blank() {
        let mut list = ChoiceList::empty();
        assert_eq!(list.add("  Tacos ").unwrap(), 0);
        assert_eq!(list.add("Ramen").unwrap(), 1);
        assert!(list.add("   ").is_err());
        assert_eq!(list.as_slice(), &["Tacos", "Ramen"]);
    }

    #[test]
    fn test_rejected_add_reports_and_keeps_list() {
        let mut list = ChoiceList::default();
        let long = "x".repeat(crate::constants::MAX_CHOICE_LEN + 1);
        let err = list.add(&long).unwrap_err();
        assert_eq!(err.code, "choice_too_long");
        assert!(err.message.is_some());
        assert_eq!(list, ChoiceList::default());
    }

    #[test]
    fn test_remove_and_clear() {
        let mut list = ChoiceList::default();
        assert_eq!(list.remove(1), Some("No".to_string()));
        assert_eq!(list.remove(5), None);
        assert_eq!(list.as_slice(), &["Yes", "Maybe"]);

        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = StdRng::seed_from_u64(2024);
        let original = ChoiceList::from_items((0..12).map(|i| format!("item {}", i)));
        let mut shuffled = original.clone();
        shuffled.shuffle_with(&mut rng);

        assert_eq!(shuffled.len(), original.len());
        let mut a = original.as_slice().to_vec();
        let mut b = shuffled.as_slice().to_vec();
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_small_lists() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty = ChoiceList::empty();
        empty.shuffle_with(&mut rng);
        assert!(empty.is_empty());

        let mut single = ChoiceList::from_items(["only"]);
        single.shuffle_with(&mut rng);
        assert_eq!(single.as_slice(), &["only"]);
    }
}
