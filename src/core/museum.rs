use crate::core::layout::layout;
use crate::core::resolver::PhotoResolver;
use crate::domain::model::{AmbientAudio, Exhibit, ExhibitItem, FrameStyle, ThemeDescriptor};
use crate::domain::ports::{AssetExistenceProbe, AssetFetcher, ExhibitRenderer};
use crate::domain::state::MuseumState;
use crate::utils::error::{MuseumError, Result};

pub struct MuseumEngine<P: AssetExistenceProbe, F: AssetFetcher> {
    resolver: PhotoResolver<P, F>,
    preload: bool,
}

impl<P: AssetExistenceProbe, F: AssetFetcher> MuseumEngine<P, F> {
    pub fn new(resolver: PhotoResolver<P, F>) -> Self {
        Self {
            resolver,
            preload: false,
        }
    }

    /// Also fetch every resolved photo into the resolver's cache.
    pub fn with_preload(mut self, preload: bool) -> Self {
        self.preload = preload;
        self
    }

    pub fn resolver(&self) -> &PhotoResolver<P, F> {
        &self.resolver
    }

    /// Loads the theme at `index` and returns the settled state with its exhibit.
    /// On error the caller's `state` is still the current one.
    pub async fn open_theme(
        &self,
        state: &MuseumState,
        index: usize,
    ) -> Result<(MuseumState, Exhibit)> {
        let state = state.begin_load(index)?;
        let theme = state
            .current_theme()
            .ok_or(MuseumError::ThemeNotFound {
                index,
                available: state.themes().len(),
            })?
            .clone();

        tracing::info!("🎨 Loading theme: {}", theme.name);
        let exhibit = self.build_exhibit(&theme).await?;
        tracing::info!(
            "✅ Theme loaded: {} ({} photos, {} layout)",
            theme.name,
            exhibit.items.len(),
            exhibit.layout
        );

        Ok((state.finish_load(), exhibit))
    }

    /// `Ok(None)` when there is no other theme to move to.
    pub async fn open_next(&self, state: &MuseumState) -> Result<Option<(MuseumState, Exhibit)>> {
        match state.next_index() {
            Some(index) => self.open_theme(state, index).await.map(Some),
            None => Ok(None),
        }
    }

    pub async fn open_previous(
        &self,
        state: &MuseumState,
    ) -> Result<Option<(MuseumState, Exhibit)>> {
        match state.previous_index() {
            Some(index) => self.open_theme(state, index).await.map(Some),
            None => Ok(None),
        }
    }

    /// Opens a theme and hands the exhibit to `renderer`.
    pub async fn present<R: ExhibitRenderer>(
        &self,
        state: &MuseumState,
        index: usize,
        renderer: &R,
    ) -> Result<(MuseumState, String)> {
        let (state, exhibit) = self.open_theme(state, index).await?;
        let location = renderer.render(&exhibit).await?;
        Ok((state, location))
    }

    async fn build_exhibit(&self, theme: &ThemeDescriptor) -> Result<Exhibit> {
        let photos = self.resolver.resolve(&theme.photo_folder, &theme.id).await;
        if photos.is_empty() {
            return Err(MuseumError::NoPhotosResolved {
                theme_id: theme.id.clone(),
            });
        }

        if self.preload {
            self.resolver.preload(&photos).await;
        }

        let placements = layout(photos.len(), theme.layout);
        let items = photos
            .into_iter()
            .zip(placements)
            .map(|(photo, placement)| ExhibitItem { photo, placement })
            .collect();

        Ok(Exhibit {
            theme_id: theme.id.clone(),
            theme_name: theme.name.clone(),
            environment: theme.environment.clone(),
            layout: theme.layout,
            display_style: theme.display_style,
            frame: FrameStyle::with_color(theme.frame_color.clone()),
            ambient: theme.ambient_sound.as_ref().map(|source| AmbientAudio {
                source: source.clone(),
                volume: theme.ambient_volume,
            }),
            items,
        })
    }
}
