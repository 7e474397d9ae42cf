use crate::types::prelude::*;

/// Sink for debug wireframes. The model matrices map the unit sphere and the
/// unit cube (both centered on the origin) onto the shape to draw.
pub trait WireframeRenderer {
    fn add_wire_sphere(&mut self, transform: &Matrix4f, color: Color);

    fn add_wire_cube(&mut self, transform: &Matrix4f, color: Color);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WireShape {
    Sphere,
    Cube,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireCommand {
    pub shape: WireShape,
    pub transform: Matrix4f,
    pub color: Color,
}

/// Collects wireframe submissions so a frame can be inspected or replayed.
#[derive(Debug, Default, Clone)]
pub struct RenderList {
    commands: Vec<WireCommand>,
}

impl RenderList {
    pub fn new() -> RenderList {
        RenderList::default()
    }

    pub fn commands(&self) -> &[WireCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl WireframeRenderer for RenderList {
    fn add_wire_sphere(&mut self, transform: &Matrix4f, color: Color) {
        self.commands.push(WireCommand {
            shape: WireShape::Sphere,
            transform: *transform,
            color,
        });
    }

    fn add_wire_cube(&mut self, transform: &Matrix4f, color: Color) {
        self.commands.push(WireCommand {
            shape: WireShape::Cube,
            transform: *transform,
            color,
        });
    }
}
