//! In-memory `TabDom` for unit tests.

use super::{ClickHandler, TabDom};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef(usize);

#[derive(Default)]
struct Node {
    id: Option<String>,
    classes: Vec<String>,
    display: Option<String>,
    attributes: HashMap<String, String>,
    inert: bool,
}

#[derive(Default)]
struct Tree {
    nodes: Vec<Node>,
    listeners: HashMap<NodeRef, Vec<ClickHandler<MemoryDom>>>,
}

#[derive(Clone, Default)]
pub struct MemoryDom {
    tree: Rc<RefCell<Tree>>,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn element(&self, id: Option<&str>, classes: &[&str]) -> NodeRef {
        let mut tree = self.tree.borrow_mut();
        tree.nodes.push(Node {
            id: id.map(str::to_string),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            ..Node::default()
        });
        NodeRef(tree.nodes.len() - 1)
    }

    /// Panel as authored in markup: no inline display yet.
    pub fn panel(&self, id: &str, class: &str) -> NodeRef {
        self.element(Some(id), &[class])
    }

    pub fn link(&self, id: &str, class: &str) -> NodeRef {
        self.element(Some(id), &[class])
    }

    /// Link wired through `data-tab-target`.
    pub fn target_link(&self, id: &str, class: &str, target: &str) -> NodeRef {
        let node = self.link(id, class);
        self.set_attribute(&node, contracts::shared::tabs::TARGET_ATTRIBUTE, target);
        node
    }

    /// Element that ignores synthesized clicks, like an SVG node.
    pub fn set_inert(&self, node: NodeRef) {
        self.tree.borrow_mut().nodes[node.0].inert = true;
    }

    pub fn display(&self, node: NodeRef) -> Option<String> {
        self.tree.borrow().nodes[node.0].display.clone()
    }

    pub fn is_shown(&self, node: NodeRef) -> bool {
        self.display(node).as_deref() == Some("block")
    }

    pub fn classes(&self, node: NodeRef) -> Vec<String> {
        self.tree.borrow().nodes[node.0].classes.clone()
    }

    pub fn is_active(&self, node: NodeRef) -> bool {
        self.has_class(&node, "active")
    }

    pub fn listener_count(&self, node: NodeRef) -> usize {
        self.tree
            .borrow()
            .listeners
            .get(&node)
            .map_or(0, |l| l.len())
    }
}

impl TabDom for MemoryDom {
    type Element = NodeRef;

    fn elements_by_class(&self, class: &str) -> Vec<NodeRef> {
        self.tree
            .borrow()
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.classes.iter().any(|c| c == class))
            .map(|(i, _)| NodeRef(i))
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<NodeRef> {
        self.tree
            .borrow()
            .nodes
            .iter()
            .position(|n| n.id.as_deref() == Some(id))
            .map(NodeRef)
    }

    fn has_class(&self, element: &NodeRef, class: &str) -> bool {
        self.tree.borrow().nodes[element.0]
            .classes
            .iter()
            .any(|c| c == class)
    }

    fn add_class(&self, element: &NodeRef, class: &str) {
        if !self.has_class(element, class) {
            self.tree.borrow_mut().nodes[element.0]
                .classes
                .push(class.to_string());
        }
    }

    fn remove_class(&self, element: &NodeRef, class: &str) {
        self.tree.borrow_mut().nodes[element.0]
            .classes
            .retain(|c| c != class);
    }

    fn set_display(&self, element: &NodeRef, value: &str) {
        self.tree.borrow_mut().nodes[element.0].display = Some(value.to_string());
    }

    fn attribute(&self, element: &NodeRef, name: &str) -> Option<String> {
        self.tree.borrow().nodes[element.0]
            .attributes
            .get(name)
            .cloned()
    }

    fn set_attribute(&self, element: &NodeRef, name: &str, value: &str) {
        self.tree.borrow_mut().nodes[element.0]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn on_click(&self, element: &NodeRef, handler: ClickHandler<Self>) {
        self.tree
            .borrow_mut()
            .listeners
            .entry(*element)
            .or_default()
            .push(handler);
    }

    fn click(&self, element: &NodeRef) -> bool {
        // Handlers mutate the tree, release the borrow first
        let listeners = {
            let tree = self.tree.borrow();
            if tree.nodes[element.0].inert {
                return false;
            }
            tree.listeners.get(element).cloned().unwrap_or_default()
        };
        for handler in listeners {
            handler(self, element);
        }
        true
    }
}
