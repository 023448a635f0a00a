//! 2D-Kartenansicht mit Pan und Zoom.
//!
//! Das Kartenbild liegt zentriert im Viewport, verschoben um `offset` (Pixel)
//! und skaliert mit `scale`. Kartenkoordinaten sind Prozent des Bildes (0–100):
//! `lat` entlang Y, `lon` entlang X.

use glam::DVec2;

/// Position auf der Karte in ARK-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapCoords {
    pub lat: f64,
    pub lon: f64,
}

impl MapCoords {
    /// Erstellt ein Koordinatenpaar.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Gibt `true` zurück wenn der Punkt innerhalb der Karte (0–100) liegt.
    pub fn is_on_map(&self) -> bool {
        (0.0..=100.0).contains(&self.lat) && (0.0..=100.0).contains(&self.lon)
    }
}

/// Pan/Zoom-Zustand der Kartenansicht
#[derive(Debug, Clone)]
pub struct MapView {
    /// Zoom-Faktor (1.0 = Bild in Originalgröße)
    pub scale: f64,
    /// Verschiebung des Bildmittelpunkts relativ zur Viewport-Mitte (Pixel)
    pub offset: DVec2,
    /// Greifpunkt während eines Pan-Vorgangs (`pointer - offset` bei Start)
    pan_anchor: Option<DVec2>,
}

impl MapView {
    /// Erstellt eine Ansicht ohne Verschiebung und Zoom.
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            offset: DVec2::ZERO,
            pan_anchor: None,
        }
    }

    /// Setzt Zoom und Verschiebung zurück.
    pub fn reset(&mut self) {
        self.scale = 1.0;
        self.offset = DVec2::ZERO;
        self.pan_anchor = None;
    }

    /// Zoomt mit `factor`, sofern der neue Wert in `[min, max]` liegt.
    ///
    /// Liegt er außerhalb, bleibt der Zoom unverändert (kein Clamping).
    /// Gibt `true` zurück wenn der Zoom geändert wurde.
    pub fn zoom_by_clamped(&mut self, factor: f64, min: f64, max: f64) -> bool {
        let new_scale = self.scale * factor;
        if new_scale >= min && new_scale <= max {
            self.scale = new_scale;
            true
        } else {
            false
        }
    }

    /// Startet einen Pan-Vorgang an der Zeigerposition.
    pub fn begin_pan(&mut self, pointer: DVec2) {
        self.pan_anchor = Some(pointer - self.offset);
    }

    /// Verschiebt die Karte, sodass der Greifpunkt unter dem Zeiger bleibt.
    ///
    /// Gibt `false` zurück wenn kein Pan aktiv ist.
    pub fn pan_to(&mut self, pointer: DVec2) -> bool {
        let Some(anchor) = self.pan_anchor else {
            return false;
        };
        self.offset = pointer - anchor;
        true
    }

    /// Beendet einen Pan-Vorgang.
    pub fn end_pan(&mut self) {
        self.pan_anchor = None;
    }

    /// Gibt `true` zurück während ein Pan-Vorgang läuft.
    pub fn is_panning(&self) -> bool {
        self.pan_anchor.is_some()
    }

    /// Konvertiert eine Viewport-Position (Pixel, Ursprung oben links) in Kartenkoordinaten.
    ///
    /// `None` solange das Bild keine Größe hat (noch nicht geladen).
    pub fn pixel_to_coords(
        &self,
        local: DVec2,
        viewport_size: DVec2,
        image_size: DVec2,
    ) -> Option<MapCoords> {
        if image_size.x <= 0.0 || image_size.y <= 0.0 {
            return None;
        }
        let rel = (local - viewport_size / 2.0 - self.offset) / self.scale;
        let percent = (rel + image_size / 2.0) / image_size;
        Some(MapCoords::new(percent.y * 100.0, percent.x * 100.0))
    }

    /// Konvertiert Kartenkoordinaten in eine Viewport-Position (Pixel).
    pub fn coords_to_pixel(
        &self,
        coords: MapCoords,
        viewport_size: DVec2,
        image_size: DVec2,
    ) -> Option<DVec2> {
        if image_size.x <= 0.0 || image_size.y <= 0.0 {
            return None;
        }
        let rel = Self::relative_to_image_center(coords, image_size);
        Some(viewport_size / 2.0 + rel * self.scale + self.offset)
    }

    /// Zentriert die Ansicht auf einen Kartenpunkt (Zoom bleibt erhalten).
    pub fn center_on(&mut self, coords: MapCoords, image_size: DVec2) {
        let rel = Self::relative_to_image_center(coords, image_size);
        self.offset = -rel * self.scale;
    }

    fn relative_to_image_center(coords: MapCoords, image_size: DVec2) -> DVec2 {
        DVec2::new(
            coords.lon / 100.0 * image_size.x - image_size.x / 2.0,
            coords.lat / 100.0 * image_size.y - image_size.y / 2.0,
        )
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const VIEWPORT: DVec2 = DVec2::new(1200.0, 800.0);
    const IMAGE: DVec2 = DVec2::new(2048.0, 2048.0);

    #[test]
    fn viewport_center_maps_to_map_center() {
        let view = MapView::new();
        let coords = view.pixel_to_coords(VIEWPORT / 2.0, VIEWPORT, IMAGE).unwrap();
        assert_relative_eq!(coords.lat, 50.0);
        assert_relative_eq!(coords.lon, 50.0);
    }

    #[test]
    fn pixel_and_coords_are_inverse() {
        let mut view = MapView::new();
        view.scale = 1.7;
        view.offset = DVec2::new(-130.0, 55.5);
        let coords = MapCoords::new(20.5, 82.0);

        let pixel = view.coords_to_pixel(coords, VIEWPORT, IMAGE).unwrap();
        let back = view.pixel_to_coords(pixel, VIEWPORT, IMAGE).unwrap();

        assert_relative_eq!(back.lat, coords.lat, epsilon = 1e-9);
        assert_relative_eq!(back.lon, coords.lon, epsilon = 1e-9);
    }

    #[test]
    fn unloaded_image_yields_none() {
        let view = MapView::new();
        assert!(view.pixel_to_coords(DVec2::ZERO, VIEWPORT, DVec2::ZERO).is_none());
        assert!(view
            .coords_to_pixel(MapCoords::new(1.0, 1.0), VIEWPORT, DVec2::ZERO)
            .is_none());
    }

    #[test]
    fn zoom_outside_limits_is_ignored() {
        let mut view = MapView::new();
        assert!(!view.zoom_by_clamped(0.4, 0.5, 5.0));
        assert_relative_eq!(view.scale, 1.0);

        assert!(view.zoom_by_clamped(1.2, 0.5, 5.0));
        assert_relative_eq!(view.scale, 1.2);

        view.scale = 4.5;
        assert!(!view.zoom_by_clamped(1.2, 0.5, 5.0));
        assert_relative_eq!(view.scale, 4.5);
    }

    #[test]
    fn pan_keeps_grab_point_under_pointer() {
        let mut view = MapView::new();
        view.offset = DVec2::new(10.0, 10.0);

        assert!(!view.pan_to(DVec2::new(5.0, 5.0)));

        view.begin_pan(DVec2::new(100.0, 100.0));
        assert!(view.is_panning());
        assert!(view.pan_to(DVec2::new(150.0, 80.0)));
        assert_eq!(view.offset, DVec2::new(60.0, -10.0));

        view.end_pan();
        assert!(!view.is_panning());
    }

    #[test]
    fn center_on_puts_point_in_viewport_center() {
        let mut view = MapView::new();
        view.scale = 2.0;
        let coords = MapCoords::new(25.0, 75.0);

        view.center_on(coords, IMAGE);
        let pixel = view.coords_to_pixel(coords, VIEWPORT, IMAGE).unwrap();

        assert_relative_eq!(pixel.x, VIEWPORT.x / 2.0, epsilon = 1e-9);
        assert_relative_eq!(pixel.y, VIEWPORT.y / 2.0, epsilon = 1e-9);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut view = MapView::new();
        view.scale = 3.0;
        view.offset = DVec2::new(1.0, 2.0);
        view.begin_pan(DVec2::ONE);

        view.reset();

        assert_relative_eq!(view.scale, 1.0);
        assert_eq!(view.offset, DVec2::ZERO);
        assert!(!view.is_panning());
    }

    #[test]
    fn on_map_bounds_are_inclusive() {
        assert!(MapCoords::new(0.0, 100.0).is_on_map());
        assert!(!MapCoords::new(-0.1, 50.0).is_on_map());
        assert!(!MapCoords::new(50.0, 100.1).is_on_map());
    }
}
