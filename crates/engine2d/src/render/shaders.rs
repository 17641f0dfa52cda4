//! GLSL sources for the 2D pipelines
//!
//! Programs are compiled by the backend through
//! [`ShaderCompiler`](crate::render::ShaderCompiler).

/// Standard vertex stage for 2D primitives
///
/// Takes flat `vec2` positions and UVs; `model` places the local geometry and
/// `projection` is the camera matrix.
pub const VERTEX_SHADER_PRIMITIVE_2D: &str = r#"
#version 410 core

layout(location = 0) in vec2 vertex;
layout(location = 1) in vec2 uv;

uniform mat4 model;
uniform mat4 projection;

out vec2 uv_out;

void main() {
    gl_Position = projection * model * vec4(vertex, 0.0, 1.0);
    uv_out = uv;
}
"#;

/// Fragment stage for signed distance field fonts
///
/// The atlas alpha channel stores the distance field. Edges are smoothed over
/// a fixed `(0.5, 0.1)` window; the `textColor` and `widthEdge` uniforms are
/// declared but not read yet, so glyphs always come out black.
pub const FRAGMENT_DISTANCE_FIELD_FONT: &str = r#"
#version 410 core

in vec2 uv_out;
out vec4 color;

uniform sampler2D tex;
uniform vec4 textColor;
uniform vec2 widthEdge;

void main() {
    float distance = 1.0 - texture(tex, uv_out).a;
    vec2 edge = vec2(0.5, 0.1);
    float alpha = 1.0 - smoothstep(edge.x, edge.x + edge.y, distance);
    color = vec4(0.0, 0.0, 0.0, alpha);
}
"#;
