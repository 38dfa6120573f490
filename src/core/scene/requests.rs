//=========================================================================
// Scene Requests
//=========================================================================
//
// Queue of stack operations requested by scenes during `update`.
//
// Scenes cannot touch the Director while it is updating them. They queue
// requests here instead; the Director applies the queue in FIFO order
// once every scene has updated.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== Internal Dependencies ===============================================

use super::SceneRef;
use crate::core::transition::Transition;

//=== SceneRequest ========================================================

/// A deferred Director operation.
pub enum SceneRequest {
    /// Cover the current scene with another.
    Push(SceneRef, Option<Box<dyn Transition>>),

    /// Remove the current scene and resume the one below.
    Pop(Option<Box<dyn Transition>>),

    /// Exit the current scene in favor of another.
    Replace(SceneRef, Option<Box<dyn Transition>>),

    /// Exit every scene.
    PopAll,

    /// Exit every scene except the topmost.
    PopAllButOne,
}

impl fmt::Debug for SceneRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn kind(t: &Option<Box<dyn Transition>>) -> &'static str {
            if t.is_some() { "animated" } else { "instant" }
        }

        match self {
            Self::Push(target, t) => write!(f, "Push({}, {})", target, kind(t)),
            Self::Pop(t) => write!(f, "Pop({})", kind(t)),
            Self::Replace(target, t) => write!(f, "Replace({}, {})", target, kind(t)),
            Self::PopAll => write!(f, "PopAll"),
            Self::PopAllButOne => write!(f, "PopAllButOne"),
        }
    }
}

//=== SceneRequests =======================================================

/// FIFO of [`SceneRequest`]s with convenience constructors.
#[derive(Debug, Default)]
pub struct SceneRequests {
    queue: Vec<SceneRequest>,
}

impl SceneRequests {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    //--- Queueing ---------------------------------------------------------

    /// Queues a raw request.
    pub fn request(&mut self, request: SceneRequest) {
        self.queue.push(request);
    }

    pub fn push(&mut self, scene: impl Into<SceneRef>) {
        self.request(SceneRequest::Push(scene.into(), None));
    }

    pub fn push_with(&mut self, scene: impl Into<SceneRef>, transition: impl Transition + 'static) {
        self.request(SceneRequest::Push(scene.into(), Some(Box::new(transition))));
    }

    pub fn pop(&mut self) {
        self.request(SceneRequest::Pop(None));
    }

    pub fn pop_with(&mut self, transition: impl Transition + 'static) {
        self.request(SceneRequest::Pop(Some(Box::new(transition))));
    }

    pub fn replace(&mut self, scene: impl Into<SceneRef>) {
        self.request(SceneRequest::Replace(scene.into(), None));
    }

    pub fn replace_with(&mut self, scene: impl Into<SceneRef>, transition: impl Transition + 'static) {
        self.request(SceneRequest::Replace(scene.into(), Some(Box::new(transition))));
    }

    pub fn pop_all(&mut self) {
        self.request(SceneRequest::PopAll);
    }

    pub fn pop_all_but_one(&mut self) {
        self.request(SceneRequest::PopAllButOne);
    }

    //--- Inspection -------------------------------------------------------

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Takes every queued request, leaving the queue empty.
    pub fn take(&mut self) -> Vec<SceneRequest> {
        std::mem::take(&mut self.queue)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transition::fade;
    use std::time::Duration;

    #[test]
    fn requests_keep_fifo_order() {
        let mut requests = SceneRequests::new();
        requests.push("pause-menu");
        requests.pop();
        requests.replace("title");
        requests.pop_all();

        let taken = requests.take();
        let rendered: Vec<_> = taken.iter().map(|r| format!("{:?}", r)).collect();
        assert_eq!(
            rendered,
            vec!["Push('pause-menu', instant)", "Pop(instant)", "Replace('title', instant)", "PopAll"]
        );
    }

    #[test]
    fn take_empties_queue() {
        let mut requests = SceneRequests::new();
        requests.pop_all_but_one();
        assert_eq!(requests.len(), 1);

        let _ = requests.take();
        assert!(requests.is_empty());
    }

    #[test]
    fn animated_requests_box_transition() {
        let mut requests = SceneRequests::new();
        requests.push_with("shop", fade(Duration::from_millis(200)));
        requests.pop_with(fade(Duration::from_millis(200)));

        let taken = requests.take();
        assert!(matches!(&taken[0], SceneRequest::Push(_, Some(_))));
        assert!(matches!(&taken[1], SceneRequest::Pop(Some(_))));
    }
}
