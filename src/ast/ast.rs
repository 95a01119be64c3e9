use std::{any::Any, fmt::Debug, ops::Deref};

use crate::SourceLocation;

/// Node Trait
///
/// Implemented by every node a Body Parser produces (header declarations
/// and body nodes). The file parser only stores and hands them back; their
/// concrete types belong to the body parser.
pub trait Node: Debug {
    /// A short name for the kind of node, for dumps and messages.
    fn get_node_name(&self) -> &'static str;
    /// Type conversion purposes - used with `.downcast_ref<T>()`
    fn as_any(&self) -> &dyn Any;
    /// Clones the node into a NodeWrapper.
    /// Clone cannot be derived for certain trait objects, so this method is necessary.
    fn clone_wrapper(&self) -> NodeWrapper;
    /// The id assigned from the shared id generator.
    fn get_id(&self) -> u64;
    fn get_location(&self) -> &SourceLocation;
}

/// Node Wrapper
///
/// A wrapper that allows for any node kind to be stored with helper methods
#[derive(Debug)]
pub struct NodeWrapper(Box<dyn Node>);

impl NodeWrapper {
    pub fn new<T: Node + 'static>(node: T) -> Self {
        NodeWrapper(Box::new(node))
    }

    pub fn downcast_ref<T: Node + 'static>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }
}

impl Deref for NodeWrapper {
    type Target = Box<dyn Node>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Node for NodeWrapper {
    fn get_node_name(&self) -> &'static str {
        self.0.get_node_name()
    }
    fn as_any(&self) -> &dyn Any {
        self.0.as_any()
    }
    fn clone_wrapper(&self) -> NodeWrapper {
        self.0.clone_wrapper()
    }
    fn get_id(&self) -> u64 {
        self.0.get_id()
    }
    fn get_location(&self) -> &SourceLocation {
        self.0.get_location()
    }
}

impl Clone for NodeWrapper {
    fn clone(&self) -> Self {
        self.clone_wrapper()
    }
}
