use web_sys::{WebGl2RenderingContext as GL, WebGlProgram, WebGlShader, WebGlUniformLocation};

use crate::error::InitError;
use crate::pointer::PointerState;
use crate::shader;

/// Linked program plus the handles the frame loop needs: two attributes for
/// the quad and the four per-frame uniforms. Built once; never rebuilt.
pub struct Pipeline {
    pub program: WebGlProgram,
    pub a_position: u32,
    pub a_uv: u32,
    u_time: WebGlUniformLocation,
    u_resolution: WebGlUniformLocation,
    u_pointer: WebGlUniformLocation,
    u_pointer_active: WebGlUniformLocation,
}

impl Pipeline {
    pub fn build(gl: &GL) -> Result<Self, InitError> {
        let vert = compile(gl, GL::VERTEX_SHADER, "vertex", shader::VERTEX)?;
        let frag = compile(gl, GL::FRAGMENT_SHADER, "fragment", shader::FRAGMENT)?;

        let program = gl.create_program().ok_or(InitError::ContextUnavailable)?;
        gl.attach_shader(&program, &vert);
        gl.attach_shader(&program, &frag);
        gl.link_program(&program);

        if !gl
            .get_program_parameter(&program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false)
        {
            let log = gl.get_program_info_log(&program).unwrap_or_default();
            gl.delete_program(Some(&program));
            return Err(InitError::PipelineBuild { stage: "link", log });
        }

        let a_position = attrib(gl, &program, shader::A_POSITION)?;
        let a_uv = attrib(gl, &program, shader::A_UV)?;
        let u_time = uniform(gl, &program, shader::U_TIME)?;
        let u_resolution = uniform(gl, &program, shader::U_RESOLUTION)?;
        let u_pointer = uniform(gl, &program, shader::U_POINTER)?;
        let u_pointer_active = uniform(gl, &program, shader::U_POINTER_ACTIVE)?;

        Ok(Self {
            program,
            a_position,
            a_uv,
            u_time,
            u_resolution,
            u_pointer,
            u_pointer_active,
        })
    }

    /// Push the per-frame uniform set. Resolution is the canvas backing
    /// store in device pixels; `active` is encoded as 1.0/0.0.
    pub fn set_frame_uniforms(
        &self,
        gl: &GL,
        elapsed_seconds: f32,
        width: f32,
        height: f32,
        pointer: PointerState,
    ) {
        gl.uniform1f(Some(&self.u_time), elapsed_seconds);
        gl.uniform2f(Some(&self.u_resolution), width, height);
        gl.uniform2f(Some(&self.u_pointer), pointer.x, pointer.y);
        gl.uniform1f(
            Some(&self.u_pointer_active),
            if pointer.active { 1.0 } else { 0.0 },
        );
    }
}

fn compile(gl: &GL, kind: u32, stage: &'static str, source: &str) -> Result<WebGlShader, InitError> {
    let shader = gl.create_shader(kind).ok_or(InitError::ContextUnavailable)?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(InitError::PipelineBuild { stage, log })
    }
}

fn attrib(gl: &GL, program: &WebGlProgram, name: &'static str) -> Result<u32, InitError> {
    let location = gl.get_attrib_location(program, name);
    if location < 0 {
        return Err(InitError::PipelineBuild {
            stage: "link",
            log: format!("attribute {name} not found"),
        });
    }
    Ok(location as u32)
}

fn uniform(
    gl: &GL,
    program: &WebGlProgram,
    name: &'static str,
) -> Result<WebGlUniformLocation, InitError> {
    gl.get_uniform_location(program, name)
        .ok_or_else(|| InitError::PipelineBuild {
            stage: "link",
            log: format!("uniform {name} not found"),
        })
}
