use serde::{Deserialize, Serialize};

/// A named swirl color.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Flavor {
    pub name: String,
    pub color: String,
}

impl Flavor {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Ordered colors used for the swirl bands and for segment coloring.
/// Always holds at least two flavors.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    flavors: Vec<Flavor>,
}

impl Palette {
    /// Fewer than two flavors cannot make a swirl, so those fall back to the default pair.
    pub fn new(flavors: Vec<Flavor>) -> Self {
        if flavors.len() >= 2 {
            Self { flavors }
        } else {
            Self::default()
        }
    }

    pub fn flavors(&self) -> &[Flavor] {
        &self.flavors
    }

    pub fn colors(&self) -> Vec<String> {
        self.flavors.iter().map(|f| f.color.clone()).collect()
    }

    pub fn color_for(&self, index: usize) -> &str {
        &self.flavors[index % self.flavors.len()].color
    }

    pub fn len(&self) -> usize {
        self.flavors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flavors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            flavors: vec![
                Flavor::new("Fresa", "#EA4B62"),
                Flavor::new("Limón", "#F7E04B"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_flavor_falls_back_to_default() {
        let palette = Palette::new(vec![Flavor::new("Menta", "#7ED9A6")]);
        assert_eq!(palette, Palette::default());
        assert_eq!(Palette::new(vec![]).len(), 2);
    }

    #[test]
    fn test_keeps_two_or_more_flavors() {
        let flavors = vec![
            Flavor::new("Menta", "#7ED9A6"),
            Flavor::new("Uva", "#8E5BD6"),
            Flavor::new("Naranja", "#F59B3A"),
        ];
        let palette = Palette::new(flavors.clone());
        assert_eq!(palette.flavors(), flavors.as_slice());
        assert_eq!(palette.colors(), vec!["#7ED9A6", "#8E5BD6", "#F59B3A"]);
    }

    #[test]
    fn test_color_for_cycles() {
        let palette = Palette::default();
        assert_eq!(palette.color_for(0), "#EA4B62");
        assert_eq!(palette.color_for(1), "#F7E04B");
        assert_eq!(palette.color_for(4), "#EA4B62");
    }
}
