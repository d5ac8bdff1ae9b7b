// gl_triangle
// copyright zipxing@hotmail.com 2022～2025

//! Recording GPUs and a windowless adapter shared by the integration tests.

#![allow(dead_code)]

use gl_triangle::event::{Event, WindowState};
use gl_triangle::render::adapter::{dispatch_events, Adapter, LoopState, Redisplay};
use gl_triangle::render::gl::{CoreGl, ShaderStage, VertexLayout};
use gl_triangle::render::legacy::LegacyGl;
use gl_triangle::render::Render;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};

pub const MOCK_INFO_LOG: &str = "0:1(1): error: syntax error";

#[derive(Debug, Clone, PartialEq)]
pub enum GlCall {
    CreateShader(ShaderStage, u32),
    ShaderSource(u32),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader(u32, u32),
    LinkProgram(u32),
    UseProgram(Option<u32>),
    DeleteProgram(u32),
    CreateVertexArray(u32),
    BindVertexArray(Option<u32>),
    DeleteVertexArray(u32),
    CreateBuffer(u32),
    BindArrayBuffer(Option<u32>),
    ArrayBufferData(Vec<u8>),
    DeleteBuffer(u32),
    VertexAttribPointer(u32, VertexLayout),
    EnableVertexAttribArray(u32),
    ClearColor([f32; 4]),
    Clear,
    DrawTriangles(i32, i32),
    Viewport(i32, i32, i32, i32),
    Wireframe(bool),
}

/// Core profile mock: hands out sequential ids and records every call
#[derive(Default)]
pub struct RecordingGl {
    calls: RefCell<Vec<GlCall>>,
    next_id: Cell<u32>,
    stages: RefCell<HashMap<u32, ShaderStage>>,
    pub fail_compile: Option<ShaderStage>,
    pub fail_link: bool,
    pub fail_create_buffer: bool,
}

impl RecordingGl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every shader of `stage` reports a failed compile
    pub fn failing_compile(stage: ShaderStage) -> Self {
        Self {
            fail_compile: Some(stage),
            ..Self::default()
        }
    }

    /// Every program reports a failed link
    pub fn failing_link() -> Self {
        Self {
            fail_link: true,
            ..Self::default()
        }
    }

    /// `create_buffer` always errors
    pub fn failing_buffer() -> Self {
        Self {
            fail_create_buffer: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<GlCall> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, pred: impl Fn(&GlCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    fn record(&self, call: GlCall) {
        self.calls.borrow_mut().push(call);
    }

    fn id(&self) -> u32 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }
}

impl CoreGl for RecordingGl {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type VertexArray = u32;

    fn create_shader(&self, stage: ShaderStage) -> Result<u32, String> {
        let id = self.id();
        self.stages.borrow_mut().insert(id, stage);
        self.record(GlCall::CreateShader(stage, id));
        Ok(id)
    }

    fn shader_source(&self, shader: u32, _source: &str) {
        self.record(GlCall::ShaderSource(shader));
    }

    fn compile_shader(&self, shader: u32) {
        self.record(GlCall::CompileShader(shader));
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        let stage = self.stages.borrow().get(&shader).copied();
        stage.is_none() || stage != self.fail_compile
    }

    fn shader_info_log(&self, _shader: u32) -> String {
        MOCK_INFO_LOG.to_string()
    }

    fn delete_shader(&self, shader: u32) {
        self.record(GlCall::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<u32, String> {
        let id = self.id();
        self.record(GlCall::CreateProgram(id));
        Ok(id)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.record(GlCall::AttachShader(program, shader));
    }

    fn link_program(&self, program: u32) {
        self.record(GlCall::LinkProgram(program));
    }

    fn program_link_status(&self, _program: u32) -> bool {
        !self.fail_link
    }

    fn program_info_log(&self, _program: u32) -> String {
        "error: unresolved symbol".to_string()
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(GlCall::UseProgram(program));
    }

    fn delete_program(&self, program: u32) {
        self.record(GlCall::DeleteProgram(program));
    }

    fn create_vertex_array(&self) -> Result<u32, String> {
        let id = self.id();
        self.record(GlCall::CreateVertexArray(id));
        Ok(id)
    }

    fn bind_vertex_array(&self, vao: Option<u32>) {
        self.record(GlCall::BindVertexArray(vao));
    }

    fn delete_vertex_array(&self, vao: u32) {
        self.record(GlCall::DeleteVertexArray(vao));
    }

    fn create_buffer(&self) -> Result<u32, String> {
        if self.fail_create_buffer {
            return Err("out of memory".to_string());
        }
        let id = self.id();
        self.record(GlCall::CreateBuffer(id));
        Ok(id)
    }

    fn bind_array_buffer(&self, buffer: Option<u32>) {
        self.record(GlCall::BindArrayBuffer(buffer));
    }

    fn array_buffer_data(&self, data: &[u8]) {
        self.record(GlCall::ArrayBufferData(data.to_vec()));
    }

    fn delete_buffer(&self, buffer: u32) {
        self.record(GlCall::DeleteBuffer(buffer));
    }

    fn vertex_attrib_pointer(&self, index: u32, layout: VertexLayout) {
        self.record(GlCall::VertexAttribPointer(index, layout));
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(GlCall::EnableVertexAttribArray(index));
    }

    fn clear_color(&self, color: [f32; 4]) {
        self.record(GlCall::ClearColor(color));
    }

    fn clear_color_buffer(&self) {
        self.record(GlCall::Clear);
    }

    fn draw_triangles(&self, first: i32, count: i32) {
        self.record(GlCall::DrawTriangles(first, count));
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(GlCall::Viewport(x, y, width, height));
    }

    fn wireframe(&self, enabled: bool) {
        self.record(GlCall::Wireframe(enabled));
    }

    fn info_strings(&self) -> [String; 3] {
        [
            "mock".to_string(),
            "3.3 mock".to_string(),
            "3.30 mock".to_string(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LegacyCall {
    Clear,
    Color3f(f32, f32, f32),
    Begin(u32),
    Vertex2f(f32, f32),
    Vertex2d(f64, f64),
    End,
    Flush,
    Viewport(i32, i32, i32, i32),
}

/// Immediate mode mock
#[derive(Default)]
pub struct RecordingLegacy {
    calls: RefCell<Vec<LegacyCall>>,
}

impl RecordingLegacy {
    pub fn calls(&self) -> Vec<LegacyCall> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, pred: impl Fn(&LegacyCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    fn record(&self, call: LegacyCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl LegacyGl for RecordingLegacy {
    fn clear_color_buffer(&self) {
        self.record(LegacyCall::Clear);
    }

    fn color3f(&self, r: f32, g: f32, b: f32) {
        self.record(LegacyCall::Color3f(r, g, b));
    }

    fn begin(&self, mode: u32) {
        self.record(LegacyCall::Begin(mode));
    }

    fn vertex2f(&self, x: f32, y: f32) {
        self.record(LegacyCall::Vertex2f(x, y));
    }

    fn vertex2d(&self, x: f64, y: f64) {
        self.record(LegacyCall::Vertex2d(x, y));
    }

    fn end(&self) {
        self.record(LegacyCall::End);
    }

    fn flush(&self) {
        self.record(LegacyCall::Flush);
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(LegacyCall::Viewport(x, y, width, height));
    }
}

/// Adapter without a window: events come from a script, one batch per
/// `poll_events`, and presenting only counts swaps.
///
/// By default every iteration draws. `on_demand` adapters repaint only when
/// a redisplay is pending, like `WinitDisplayAdapter`.
pub struct HeadlessAdapter {
    state: WindowState,
    script: VecDeque<Vec<Event>>,
    frame_limit: Option<u64>,
    redisplay: Option<Redisplay>,
    pub swaps: u64,
    pub polls: u64,
    /// times `process_input` actually set the close flag
    pub close_requests: u64,
}

impl HeadlessAdapter {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            state: WindowState::new(width, height),
            script: VecDeque::new(),
            frame_limit: None,
            redisplay: None,
            swaps: 0,
            polls: 0,
            close_requests: 0,
        }
    }

    /// Draw only when a redisplay is pending
    pub fn on_demand(width: u32, height: u32) -> Self {
        Self {
            redisplay: Some(Redisplay::new()),
            ..Self::new(width, height)
        }
    }

    /// Stop after `n` iterations even if nobody asked to close
    pub fn with_frame_limit(mut self, n: u64) -> Self {
        self.frame_limit = Some(n);
        self
    }

    /// Queue the events delivered by one future `poll_events`
    pub fn push_events(&mut self, events: Vec<Event>) {
        self.script.push_back(events);
    }

    pub fn window_state(&self) -> &WindowState {
        &self.state
    }
}

impl Adapter for HeadlessAdapter {
    fn state(&self) -> LoopState {
        let limited = self.frame_limit.is_some_and(|n| self.polls >= n);
        LoopState::from_close_flag(self.state.should_close() || limited)
    }

    fn process_input(&mut self) {
        if self.state.process_input() {
            self.close_requests += 1;
        }
    }

    fn render_frame(&mut self, render: &mut dyn Render) {
        if let Some(rd) = self.redisplay.as_mut() {
            if !rd.take() {
                return;
            }
        }
        render.draw();
        self.swaps += 1;
    }

    fn poll_events(&mut self, render: &mut dyn Render) {
        let events = self.script.pop_front().unwrap_or_default();
        match self.redisplay.as_mut() {
            Some(rd) => rd.dispatch(&mut self.state, &events, render),
            None => {
                dispatch_events(&mut self.state, &events, render);
            }
        }
        self.polls += 1;
    }
}
