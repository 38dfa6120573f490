//=========================================================================
// Display Tree
//=========================================================================
//
// Presentation-side collaborator of the Director.
//
// The Director keeps the host display tree's child order consistent with
// the logical scene stack; transitions animate `SceneView` properties and
// reorder nodes through `make_top`.
//
// Architecture:
//   Director ──add_child/add_child_at/remove_child──> DisplayTree
//   Transition ──make_top(a, b)──────────────────────> DisplayTree
//
// Child index 0 is the bottom-most node.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::scene::SceneId;

//=== SceneView ===========================================================

/// Visual properties of a scene's root node.
///
/// Stands in for the host library's container node. Transitions animate
/// these; renderers read them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneView {
    pub x: f32,
    pub y: f32,
    pub alpha: f32,
    pub scale: f32,
    pub visible: bool,
}

impl SceneView {
    /// Untransformed, fully opaque, visible.
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        alpha: 1.0,
        scale: 1.0,
        visible: true,
    };

    /// Moves the node to `(x, y)`.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }
}

impl Default for SceneView {
    fn default() -> Self {
        Self::IDENTITY
    }
}

//=== DisplayTree =========================================================

/// Host display container holding one node per scene.
pub trait DisplayTree {
    /// Appends `id` as the top-most child.
    fn add_child(&mut self, id: SceneId);

    /// Inserts `id` at `index`, clamped to the current child count.
    fn add_child_at(&mut self, id: SceneId, index: usize);

    /// Detaches `id`. Returns `false` if it was not a child.
    fn remove_child(&mut self, id: SceneId) -> bool;

    /// Position of `id`, bottom-most first.
    fn child_index(&self, id: SceneId) -> Option<usize>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Places `a` directly above `b`.
///
/// Does nothing if either node is absent or `a` already renders above
/// `b`. Returns whether the order changed.
pub fn make_top(tree: &mut dyn DisplayTree, a: SceneId, b: SceneId) -> bool {
    let (Some(ia), Some(ib)) = (tree.child_index(a), tree.child_index(b)) else {
        return false;
    };
    if a == b || ia > ib {
        return false;
    }

    tree.remove_child(a);
    // `b` shifted down by one after the removal.
    tree.add_child_at(a, ib);
    true
}

//=== DisplayList =========================================================

/// In-memory display tree; the default for headless use and tests.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    children: Vec<SceneId>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Children bottom-most first.
    pub fn children(&self) -> &[SceneId] {
        &self.children
    }
}

impl DisplayTree for DisplayList {
    fn add_child(&mut self, id: SceneId) {
        self.remove_child(id);
        self.children.push(id);
    }

    fn add_child_at(&mut self, id: SceneId, index: usize) {
        self.remove_child(id);
        let index = index.min(self.children.len());
        self.children.insert(index, id);
    }

    fn remove_child(&mut self, id: SceneId) -> bool {
        match self.children.iter().position(|&c| c == id) {
            Some(pos) => {
                self.children.remove(pos);
                true
            }
            None => false,
        }
    }

    fn child_index(&self, id: SceneId) -> Option<usize> {
        self.children.iter().position(|&c| c == id)
    }

    fn len(&self) -> usize {
        self.children.len()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
