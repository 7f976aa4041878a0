use crate::core::{Measurement, ProjectSettings};
use glam::Vec3;

/// Projektionsart der Kamera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Projection {
    #[default]
    Perspective,
    Orthographic,
}

impl Projection {
    /// Wechselt zwischen perspektivisch und orthografisch.
    pub fn toggled(self) -> Self {
        match self {
            Projection::Perspective => Projection::Orthographic,
            Projection::Orthographic => Projection::Perspective,
        }
    }
}

/// Kamera des Viewports
#[derive(Debug, Clone, PartialEq)]
pub struct CameraState {
    pub projection: Projection,
    pub position: Vec3,
}

/// Darstellung einer Gitter-Achse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridAxis {
    #[default]
    None,
    Primary,
    Secondary,
    Tertiary,
}

impl GridAxis {
    pub const ALL: [GridAxis; 4] = [
        GridAxis::None,
        GridAxis::Primary,
        GridAxis::Secondary,
        GridAxis::Tertiary,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GridAxis::None => "None",
            GridAxis::Primary => "Primary",
            GridAxis::Secondary => "Secondary",
            GridAxis::Tertiary => "Tertiary",
        }
    }
}

/// Raumachse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

/// Gitter im Viewport
#[derive(Debug, Clone, PartialEq)]
pub struct GridState {
    pub visible: bool,
    /// Einheit folgt `settings.measurement` des Projekts
    pub unit: Measurement,
    axes: [GridAxis; 3],
}

impl GridState {
    pub fn axis(&self, axis: Axis) -> GridAxis {
        self.axes[axis.index()]
    }

    pub fn set_axis(&mut self, axis: Axis, value: GridAxis) {
        self.axes[axis.index()] = value;
    }
}

impl Default for GridState {
    fn default() -> Self {
        Self {
            visible: true,
            unit: Measurement::Metric,
            axes: [GridAxis::Primary, GridAxis::Primary, GridAxis::None],
        }
    }
}

/// Messpunkt des Lineals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulerPoint {
    A,
    B,
}

/// Lineal: Hover-Punkt und zwei gesetzte Messpunkte
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RulerState {
    pub visible: bool,
    pub snap: bool,
    pub hover: Option<Vec3>,
    pub a: Option<Vec3>,
    pub b: Option<Vec3>,
}

impl RulerState {
    /// Abstand zwischen A und B, falls beide gesetzt sind.
    pub fn distance(&self) -> Option<f32> {
        Some(self.a?.distance(self.b?))
    }
}

/// Zustand des Viewports
#[derive(Debug, Clone, PartialEq)]
pub struct RenderViewState {
    pub camera: CameraState,
    pub grid: GridState,
    pub ruler: RulerState,
    /// Szenen-Ausdehnung (folgt `settings.bounds`)
    pub bounds: f32,
    /// Screenshot für den PNG-Export angefordert
    pub screenshot_requested: bool,
}

/// Kameraposition für eine Szenen-Ausdehnung: `[0, -2·bounds, bounds/2]`.
pub fn camera_position_for_bounds(bounds: f32) -> Vec3 {
    Vec3::new(0.0, -2.0 * bounds, bounds / 2.0)
}

impl RenderViewState {
    /// Ausgangszustand passend zu den Projekteinstellungen.
    pub fn for_settings(settings: &ProjectSettings) -> Self {
        Self {
            camera: CameraState {
                projection: Projection::default(),
                position: camera_position_for_bounds(settings.bounds),
            },
            grid: GridState {
                unit: settings.measurement,
                ..GridState::default()
            },
            ruler: RulerState::default(),
            bounds: settings.bounds,
            screenshot_requested: false,
        }
    }

    /// Übernimmt Einheit und Ausdehnung aus den Projekteinstellungen.
    ///
    /// Die Kamera wird nur bei geänderter Ausdehnung neu positioniert.
    pub fn sync_with_settings(&mut self, settings: &ProjectSettings) {
        self.grid.unit = settings.measurement;
        if self.bounds != settings.bounds {
            self.bounds = settings.bounds;
            self.camera.position = camera_position_for_bounds(settings.bounds);
        }
    }
}

impl Default for RenderViewState {
    fn default() -> Self {
        Self::for_settings(&ProjectSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sync_moves_camera_only_on_bounds_change() {
        let mut view = RenderViewState::default();
        view.camera.position = Vec3::new(1.0, 2.0, 3.0);

        view.sync_with_settings(&ProjectSettings {
            measurement: Measurement::Imperial,
            bounds: view.bounds,
        });
        assert_eq!(view.grid.unit, Measurement::Imperial);
        assert_eq!(view.camera.position, Vec3::new(1.0, 2.0, 3.0));

        view.sync_with_settings(&ProjectSettings {
            measurement: Measurement::Imperial,
            bounds: 48.0,
        });
        assert_relative_eq!(view.camera.position.y, -96.0);
        assert_relative_eq!(view.camera.position.z, 24.0);
    }

    #[test]
    fn ruler_distance_needs_both_points() {
        let mut ruler = RulerState {
            a: Some(Vec3::ZERO),
            ..RulerState::default()
        };
        assert_eq!(ruler.distance(), None);
        ruler.b = Some(Vec3::new(3.0, 4.0, 0.0));
        assert_relative_eq!(ruler.distance().unwrap_or_default(), 5.0);
    }
}
