use std::{any::Any, sync::Arc};

use crate::SourceLocation;

use super::ast::{Node, NodeWrapper};

/// The caller's tag for why a file is being parsed. Opaque to the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileKind {
    #[default]
    Source,
    Dependency,
    IndirectDependency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Basic,
    Delegate,
}

impl TemplateKind {
    pub fn open_tag(&self) -> &'static str {
        match self {
            TemplateKind::Basic => "{template",
            TemplateKind::Delegate => "{deltemplate",
        }
    }

    pub fn close_tag(&self) -> &'static str {
        match self {
            TemplateKind::Basic => "{/template}",
            TemplateKind::Delegate => "{/deltemplate}",
        }
    }
}

/// `name="value"` inside a namespace tag. The value is taken verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceDeclaration {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub location: SourceLocation,
}

impl NamespaceDeclaration {
    /// The value of the first attribute named `name`.
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
            .map(|attribute| attribute.value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasDeclaration {
    pub target: String,
    pub local_name: Option<String>,
    pub location: SourceLocation,
}

impl AliasDeclaration {
    /// The name the alias is referenced by: the explicit `as` name, or the last segment of the target.
    pub fn alias_name(&self) -> &str {
        match &self.local_name {
            Some(name) => name,
            None => self.target.rsplit('.').next().unwrap_or(&self.target),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TemplateNode {
    pub id: u64,
    pub kind: TemplateKind,
    /// The unparsed name and attributes from the open tag.
    pub command_text: String,
    pub doc_comment: Option<String>,
    pub location: SourceLocation,
    display_name: String,
    /// Filled in from the body parser; `None` when the body failed to parse.
    pub header: Option<Vec<NodeWrapper>>,
    pub body: Option<Vec<NodeWrapper>>,
}

impl TemplateNode {
    pub fn new(
        id: u64,
        kind: TemplateKind,
        command_text: String,
        doc_comment: Option<String>,
        location: SourceLocation,
        namespace: Option<&str>,
    ) -> Self {
        let name = command_text.split_whitespace().next().unwrap_or("");
        let display_name = match (kind, namespace) {
            (TemplateKind::Basic, Some(namespace)) if name.starts_with('.') => {
                format!("{}{}", namespace, name)
            }
            _ => String::from(name),
        };

        TemplateNode {
            id,
            kind,
            command_text,
            doc_comment,
            location,
            display_name,
            header: None,
            body: None,
        }
    }

    /// The name as written in the open tag.
    pub fn name(&self) -> &str {
        self.command_text.split_whitespace().next().unwrap_or("")
    }

    /// The name used in messages, qualified with the namespace for `.partial` names.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn is_delegate(&self) -> bool {
        self.kind == TemplateKind::Delegate
    }

    pub fn is_parsed(&self) -> bool {
        self.body.is_some()
    }
}

/// The root of a parsed file.
#[derive(Debug, Clone)]
pub struct SourceFileNode {
    pub id: u64,
    pub file_path: Arc<String>,
    pub file_kind: FileKind,
    pub delegate_package: Option<String>,
    pub namespace: Option<NamespaceDeclaration>,
    pub aliases: Vec<AliasDeclaration>,
    pub templates: Vec<TemplateNode>,
}

impl SourceFileNode {
    pub fn namespace_name(&self) -> Option<&str> {
        self.namespace.as_ref().map(|namespace| namespace.name.as_str())
    }

    pub fn get_template(&self, display_name: &str) -> Option<&TemplateNode> {
        self.templates
            .iter()
            .find(|template| template.display_name() == display_name)
    }
}

/// Template text kept as-is, produced by `RawTextBodyParser`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTextNode {
    pub id: u64,
    pub text: String,
    pub location: SourceLocation,
}

impl Node for RawTextNode {
    fn get_node_name(&self) -> &'static str {
        "RawText"
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> NodeWrapper {
        NodeWrapper::new(self.clone())
    }
    fn get_id(&self) -> u64 {
        self.id
    }
    fn get_location(&self) -> &SourceLocation {
        &self.location
    }
}
