/// Collapses the render and resize signals seen during one loop turn
#[derive(Debug, Default)]
pub struct Coalescer {
    render_requests: usize,
    saw_tui_render: bool,
    last_resize: Option<(u16, u16)>,
}

impl Coalescer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_render(&mut self) {
        self.render_requests += 1;
    }

    /// The terminal's frame timer fired
    pub fn frame_tick(&mut self) {
        self.saw_tui_render = true;
    }

    /// Only the last size of a burst matters
    pub fn resize(&mut self, width: u16, height: u16) {
        self.last_resize = Some((width, height));
    }

    pub fn take_resize(&mut self) -> Option<(u16, u16)> {
        self.last_resize.take()
    }

    /// Whether this turn should draw; resets the render signals
    pub fn take_render(&mut self) -> bool {
        let render = self.render_requests > 0 || self.saw_tui_render;
        self.render_requests = 0;
        self.saw_tui_render = false;
        render
    }
}
