/// Callback run once a frame has been painted.
pub type FrameCallback<S> = Box<dyn FnOnce(&mut S)>;

/// Queue of callbacks that run after the next paint.
///
/// The host calls [`FrameScheduler::run`] once per frame, after the terminal
/// has been drawn. Callbacks requested while a run is in progress are kept
/// for the following frame.
pub struct FrameScheduler<S> {
    callbacks: Vec<FrameCallback<S>>,
    frame: u64,
}

impl<S> FrameScheduler<S> {
    pub fn new() -> Self {
        Self {
            callbacks: Vec::new(),
            frame: 0,
        }
    }

    pub fn request_frame(&mut self, callback: impl FnOnce(&mut S) + 'static) {
        self.callbacks.push(Box::new(callback));
    }

    pub fn is_pending(&self) -> bool {
        !self.callbacks.is_empty()
    }

    /// Number of frames painted so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Mark a frame as painted and run the callbacks queued before it.
    /// Returns how many callbacks ran.
    pub fn run(&mut self, target: &mut S) -> usize {
        self.frame += 1;
        let callbacks = std::mem::take(&mut self.callbacks);
        let count = callbacks.len();
        for callback in callbacks {
            callback(target);
        }
        count
    }
}

impl<S> Default for FrameScheduler<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> std::fmt::Debug for FrameScheduler<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameScheduler")
            .field("pending", &self.callbacks.len())
            .field("frame", &self.frame)
            .finish()
    }
}
