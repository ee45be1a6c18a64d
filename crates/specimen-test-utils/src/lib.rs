//! Testing utilities for the specimen workspace
//!
//! Shared type model and tracing setup.

#![allow(missing_docs)]

use specimen_kernel::{TypeInfo, TypeRef};
use tracing_subscriber::EnvFilter;

/// Small type hierarchy used across the workspace tests
///
/// ```text
/// IComparable (interface)        IDisposable (interface)
/// Component { id: int }          new()
/// Widget : Component, IComparable
///     new(name: string) | new(name: string, parts: int[])
///     property label: string, field count: int
/// Gadget : IComparable, IDisposable   new(name: string)
/// Assembly   new(count: int, widget: Widget), property total: int
/// Order      new(), property count: int, field total: int
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    pub int: TypeRef,
    pub text: TypeRef,
    pub ints: TypeRef,
    pub comparable: TypeRef,
    pub disposable: TypeRef,
    pub component: TypeRef,
    pub widget: TypeRef,
    pub gadget: TypeRef,
    pub assembly: TypeRef,
    pub order: TypeRef,
}

impl Model {
    pub fn new() -> Self {
        let int = TypeRef::int();
        let text = TypeRef::text();
        let ints = TypeRef::array_of(&int);

        let comparable = TypeInfo::interface("IComparable").build().unwrap();
        let disposable = TypeInfo::interface("IDisposable").build().unwrap();

        let component = TypeInfo::class("Component")
            .default_constructor()
            .property("id", &int)
            .build()
            .unwrap();

        let widget = TypeInfo::class("Widget")
            .extends(&component)
            .implements(&comparable)
            .constructor([("name", &text)])
            .constructor([("name", &text), ("parts", &ints)])
            .property("label", &text)
            .field("count", &int)
            .build()
            .unwrap();

        let gadget = TypeInfo::class("Gadget")
            .implements(&comparable)
            .implements(&disposable)
            .constructor([("name", &text)])
            .build()
            .unwrap();

        let assembly = TypeInfo::class("Assembly")
            .constructor([("count", &int), ("widget", &widget)])
            .property("total", &int)
            .build()
            .unwrap();

        let order = TypeInfo::class("Order")
            .default_constructor()
            .property("count", &int)
            .field("total", &int)
            .build()
            .unwrap();

        Self {
            int,
            text,
            ints,
            comparable,
            disposable,
            component,
            widget,
            gadget,
            assembly,
            order,
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

/// Install a test-friendly subscriber once; honours `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
