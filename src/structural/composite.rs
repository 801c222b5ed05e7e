//! Composite: products and boxes of products (and boxes of boxes) answer the
//! same questions.
//!
//! Traversal and drop use an explicit stack, so arbitrarily deep nesting
//! does not grow the call stack.

use crate::error::Result;
use crate::transcript::Transcript;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    pub price: u32,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Crate {
    pub label: String,
    children: Vec<Node>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Node {
    Product(Product),
    Crate(Crate),
}

impl Node {
    pub fn product(name: impl Into<String>, price: u32) -> Self {
        Node::Product(Product {
            name: name.into(),
            price,
        })
    }

    pub fn boxed(label: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Crate(Crate {
            label: label.into(),
            children,
        })
    }

    /// Sum of every product price underneath this node.
    pub fn price(&self) -> u64 {
        let mut total = 0u64;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Node::Product(product) => total += u64::from(product.price),
                Node::Crate(crate_) => stack.extend(crate_.children.iter()),
            }
        }
        total
    }

    pub fn product_count(&self) -> usize {
        self.walk().filter(|(node, _)| matches!(node, Node::Product(_))).count()
    }

    /// Depth-first walk in insertion order, yielding each node with its depth.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(self, 0)],
        }
    }

    pub fn unpack(&self, out: &mut Transcript) {
        for (node, depth) in self.walk() {
            let indent = "  ".repeat(depth);
            match node {
                Node::Product(product) => {
                    out.line(format!("{indent}{} ({})", product.name, product.price))
                }
                Node::Crate(crate_) => out.line(format!("{indent}[{}]", crate_.label)),
            }
        }
    }
}

impl Crate {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn add(&mut self, node: Node) {
        self.children.push(node);
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

impl Drop for Crate {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(node) = pending.pop() {
            if let Node::Crate(mut inner) = node {
                pending.append(&mut inner.children);
            }
        }
    }
}

pub struct Walk<'a> {
    stack: Vec<(&'a Node, usize)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (&'a Node, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;
        if let Node::Crate(crate_) = node {
            self.stack
                .extend(crate_.children.iter().rev().map(|child| (child, depth + 1)));
        }
        Some((node, depth))
    }
}

pub fn scenario(out: &mut Transcript) -> Result<()> {
    let mut order = Crate::new("Shipping box");
    order.add(Node::product("Phone", 700));
    order.add(Node::boxed(
        "Accessories",
        vec![
            Node::product("Charger", 25),
            Node::boxed("Small box", vec![Node::product("Earbuds", 120)]),
        ],
    ));
    order.add(Node::product("Receipt", 0));

    let order = Node::Crate(order);
    order.unpack(out);
    out.line(format!("Total price: {}", order.price()));
    Ok(())
}
