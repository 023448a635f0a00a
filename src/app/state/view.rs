use crate::core::{MapCoords, MapView};
use glam::DVec2;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Pan/Zoom der Kartenansicht
    pub map_view: MapView,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: DVec2,
    /// Natürliche Größe des geladenen Kartenbildes (None = kein Bild)
    pub image_size: Option<DVec2>,
    /// Kartenkoordinaten unter dem Mauszeiger
    pub hover_coords: Option<MapCoords>,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Konvertiert eine Viewport-Position in Kartenkoordinaten.
    ///
    /// `None` solange kein Kartenbild geladen ist.
    pub fn coords_at(&self, local: DVec2) -> Option<MapCoords> {
        let image_size = self.image_size?;
        self.map_view
            .pixel_to_coords(local, self.viewport_size, image_size)
    }
}
