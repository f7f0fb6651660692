use crate::domain::model::ThemeDescriptor;
use crate::utils::error::{MuseumError, Result};

/// Navigation state of the museum. Transitions return the next value instead
/// of mutating shared fields; a rejected transition leaves the old one usable.
#[derive(Debug, Clone, PartialEq)]
pub struct MuseumState {
    themes: Vec<ThemeDescriptor>,
    current_index: usize,
    loading: bool,
}

impl MuseumState {
    pub fn new(themes: Vec<ThemeDescriptor>) -> Self {
        Self {
            themes,
            current_index: 0,
            loading: false,
        }
    }

    pub fn themes(&self) -> &[ThemeDescriptor] {
        &self.themes
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn current_theme(&self) -> Option<&ThemeDescriptor> {
        self.themes.get(self.current_index)
    }

    pub fn theme(&self, index: usize) -> Option<&ThemeDescriptor> {
        self.themes.get(index)
    }

    pub fn index_of(&self, theme_id: &str) -> Option<usize> {
        self.themes.iter().position(|t| t.id == theme_id)
    }

    /// `None` while loading or when there is nothing to switch to.
    pub fn next_index(&self) -> Option<usize> {
        if self.loading || self.themes.len() <= 1 {
            return None;
        }
        Some((self.current_index + 1) % self.themes.len())
    }

    pub fn previous_index(&self) -> Option<usize> {
        if self.loading || self.themes.len() <= 1 {
            return None;
        }
        Some(if self.current_index == 0 {
            self.themes.len() - 1
        } else {
            self.current_index - 1
        })
    }

    pub fn begin_load(&self, index: usize) -> Result<Self> {
        if self.loading {
            return Err(MuseumError::LoadInProgress);
        }
        if index >= self.themes.len() {
            return Err(MuseumError::ThemeNotFound {
                index,
                available: self.themes.len(),
            });
        }
        Ok(Self {
            themes: self.themes.clone(),
            current_index: index,
            loading: true,
        })
    }

    pub fn finish_load(self) -> Self {
        Self {
            loading: false,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{DisplayStyle, LayoutMode};

    fn theme(id: &str) -> ThemeDescriptor {
        ThemeDescriptor {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            environment: id.to_string(),
            photo_folder: format!("assets/photos/{}/", id),
            layout: LayoutMode::Wall,
            display_style: DisplayStyle::WallMounted,
            ambient_sound: None,
            ambient_volume: 0.3,
            frame_color: "#2c2c2c".to_string(),
        }
    }

    #[test]
    fn test_navigation_wraps_around() {
        let state = MuseumState::new(vec![theme("a"), theme("b"), theme("c")]);
        assert_eq!(state.next_index(), Some(1));
        assert_eq!(state.previous_index(), Some(2));

        let state = state.begin_load(2).unwrap().finish_load();
        assert_eq!(state.next_index(), Some(0));
        assert_eq!(state.previous_index(), Some(1));
    }

    #[test]
    fn test_single_theme_has_no_neighbours() {
        let state = MuseumState::new(vec![theme("only")]);
        assert_eq!(state.next_index(), None);
        assert_eq!(state.previous_index(), None);
    }

    #[test]
    fn test_loading_blocks_navigation_and_reloads() {
        let state = MuseumState::new(vec![theme("a"), theme("b")])
            .begin_load(1)
            .unwrap();
        assert!(state.is_loading());
        assert_eq!(state.current_index(), 1);
        assert_eq!(state.next_index(), None);
        assert!(matches!(
            state.begin_load(0),
            Err(MuseumError::LoadInProgress)
        ));

        let state = state.finish_load();
        assert!(!state.is_loading());
        assert_eq!(state.current_theme().unwrap().id, "b");
    }

    #[test]
    fn test_begin_load_rejects_unknown_index() {
        let state = MuseumState::new(vec![theme("a")]);
        let err = state.begin_load(3).unwrap_err();
        assert!(matches!(
            err,
            MuseumError::ThemeNotFound {
                index: 3,
                available: 1
            }
        ));

        // the rejected transition leaves the original state intact
        assert!(!state.is_loading());
        assert_eq!(state.current_index(), 0);
        assert!(state.begin_load(0).is_ok());
    }

    #[test]
    fn test_index_of() {
        let state = MuseumState::new(vec![theme("gallery"), theme("thailand")]);
        assert_eq!(state.index_of("thailand"), Some(1));
        assert_eq!(state.index_of("mars"), None);
    }
}
