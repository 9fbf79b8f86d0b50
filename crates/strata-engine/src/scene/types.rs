use std::collections::HashMap;

/// Which per-frame queue an operation belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum QueueKind {
    /// Sorted by layer, drawn under per-layer 2D cameras.
    Scene2D,
    /// Drawn in enqueue order under the 3D camera.
    Scene3D,
    /// Drawn in enqueue order under the base 2D camera, after everything else.
    Gui,
}

const BUILTIN_2D: &[&str] = &[
    "DrawRectangle", "rect", "DrawCircle", "circle", "DrawLine", "DrawLineV",
    "DrawCircleLines", "DrawRectangleLines", "DrawTriangle", "DrawTriangleLines",
    "DrawPixel", "DrawPoly", "DrawEllipse", "DrawRing", "DrawRectangleRounded", "DrawFPS",
    "DrawLineEx", "DrawPixelV", "DrawCircleSector", "DrawCircleGradient", "DrawCircleV",
    "DrawEllipseLines", "DrawRingLines", "DrawRectangleV", "DrawRectangleRec",
    "DrawRectanglePro", "DrawRectangleLinesEx", "DrawRectangleRoundedLines", "DrawPolyLines",
    "DrawText", "DrawTextSimple", "DrawTextEx", "DrawTextPro", "DrawTextExFont",
    "DrawTextCodepoint", "DrawTextCodepoints",
    "DrawSprite", "sprite", "SpriteDraw", "DrawSpriteAnimation",
    "DrawTexture", "DrawTextureEx", "DrawTextureRec", "DrawTexturePro", "DrawTextureV",
    "DrawTextureNPatch",
    "SpriteBatchBegin", "SpriteBatchEnd",
    "DrawBackground", "DrawTilemap", "DrawParticles", "DrawParticleEmitter",
    "DrawView", "ClearBackground", "Background",
];

const BUILTIN_3D: &[&str] = &[
    "DrawGrid", "DrawModel", "DrawModelSimple", "DrawCube", "cube", "DrawCubeWires",
    "DrawSphere", "DrawSphereWires", "DrawPlane", "DrawLine3D", "DrawPoint3D", "DrawCircle3D",
    "DrawCubeV", "DrawCylinder", "DrawCylinderWires", "DrawRay", "DrawTriangle3D",
    "DrawTriangleStrip3D", "DrawCubeWiresV", "DrawSphereEx", "DrawCylinderEx",
    "DrawCylinderWiresEx", "DrawCapsule", "DrawCapsuleWires", "DrawModelEx", "DrawModelWires",
    "DrawBoundingBox", "DrawModelWiresEx", "DrawModelPoints", "DrawModelPointsEx",
    "DrawBillboard", "DrawBillboardRec", "DrawBillboardPro", "DrawMesh", "DrawMeshInstanced",
    "DrawObject", "DrawLevelObject",
];

const BUILTIN_GUI: &[&str] = &[
    "GuiLabel", "GuiButton", "button", "GuiCheckBox", "GuiSlider", "GuiProgressBar",
    "GuiTextbox", "GuiTextBoxId", "GuiDropdownBox", "GuiWindowBox", "GuiGroupBox", "GuiLine",
    "GuiPanel", "GuiWindow", "GuiList", "GuiDropdown", "GuiProgressBarSimple",
];

/// Operation name → queue classification.
///
/// Names are case-insensitive. Operations missing from the table are never
/// queued; the host draws them immediately instead.
#[derive(Debug, Clone)]
pub struct RenderTypes {
    by_name: HashMap<String, QueueKind>,
}

impl RenderTypes {
    /// A table with no registrations.
    pub fn empty() -> Self {
        Self { by_name: HashMap::new() }
    }

    /// The built-in 2D, 3D and GUI registrations.
    pub fn builtin() -> Self {
        let mut types = Self::empty();
        for (names, kind) in [
            (BUILTIN_2D, QueueKind::Scene2D),
            (BUILTIN_3D, QueueKind::Scene3D),
            (BUILTIN_GUI, QueueKind::Gui),
        ] {
            for name in names {
                types.register(name, kind);
            }
        }
        types
    }

    /// Adds or overrides a registration.
    pub fn register(&mut self, name: &str, kind: QueueKind) {
        self.by_name.insert(name.to_ascii_lowercase(), kind);
    }

    pub fn classify(&self, name: &str) -> Option<QueueKind> {
        self.by_name.get(&name.to_ascii_lowercase()).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl Default for RenderTypes {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_classifies_each_queue() {
        let types = RenderTypes::builtin();
        assert_eq!(types.classify("DrawRectangle"), Some(QueueKind::Scene2D));
        assert_eq!(types.classify("spritedraw"), Some(QueueKind::Scene2D));
        assert_eq!(types.classify("DrawModel"), Some(QueueKind::Scene3D));
        assert_eq!(types.classify("GUIBUTTON"), Some(QueueKind::Gui));
        assert_eq!(types.classify("InitWindow"), None);
    }

    #[test]
    fn register_overrides_builtin() {
        let mut types = RenderTypes::builtin();
        types.register("DrawGrid", QueueKind::Gui);
        assert_eq!(types.classify("drawgrid"), Some(QueueKind::Gui));
    }

    #[test]
    fn builtin_lists_do_not_overlap() {
        let types = RenderTypes::builtin();
        assert_eq!(types.len(), BUILTIN_2D.len() + BUILTIN_3D.len() + BUILTIN_GUI.len());
    }
}
