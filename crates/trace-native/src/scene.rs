use std::ops::Range;
use trace_core::{
    dot_quad, path_vertices, FrameView, LineVertex, Renderer, CENTER_RGBA, DOT_RGBA, TRACE_RGBA,
    TRACE_DOT_RADIUS,
};

/// CPU-side vertex data for one frame: line strips plus one triangle batch.
#[derive(Clone, Debug, Default)]
pub struct FrameGeometry {
    pub vertices: Vec<LineVertex>,
    pub strips: Vec<Range<u32>>,
    pub triangles: Range<u32>,
}

impl FrameGeometry {
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.strips.clear();
        self.triangles = 0..0;
    }

    pub fn push_strip(&mut self, verts: impl IntoIterator<Item = LineVertex>) {
        let start = self.vertices.len() as u32;
        self.vertices.extend(verts);
        let end = self.vertices.len() as u32;
        // a strip needs two points to draw anything
        if end - start >= 2 {
            self.strips.push(start..end);
        }
    }

    pub fn push_triangles(&mut self, verts: impl IntoIterator<Item = LineVertex>) {
        let start = self.vertices.len() as u32;
        self.vertices.extend(verts);
        let end = self.vertices.len() as u32;
        if self.triangles.is_empty() {
            self.triangles = start..end;
        } else {
            // triangle batches stay contiguous: only append right after the last one
            debug_assert_eq!(self.triangles.end, start);
            self.triangles.end = end;
        }
    }
}

impl Renderer for FrameGeometry {
    fn draw(&mut self, view: FrameView<'_>) {
        self.push_strip(path_vertices(view.center_path, CENTER_RGBA));
        self.push_strip(path_vertices(view.trace_path, TRACE_RGBA));
        self.push_triangles(dot_quad(
            view.sample.trace_position,
            TRACE_DOT_RADIUS,
            DOT_RGBA,
        ));
    }
}
