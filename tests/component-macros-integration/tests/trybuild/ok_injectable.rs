use component_macros::Injectable;
use di_abstractions::{Capabilities, DiContainer, Inject, Injectable};
use di_impl::DiContainerImpl;
use std::sync::Arc;

#[derive(Default, Injectable)]
#[injectable(global)]
struct Clock;

#[derive(Default, Injectable)]
struct Base {
    #[inject]
    clock: Inject<Clock>,
}

#[derive(Default, Injectable)]
#[injectable(node, cascade)]
struct Hud {
    #[inject(flatten)]
    base: Base,
    #[inject]
    container: Inject<DiContainerImpl>,
    label: String,
}

fn main() {
    assert_eq!(Clock::declared_capabilities(), Capabilities::GLOBAL);

    let container = DiContainerImpl::new();
    container.register(Arc::new(Clock)).unwrap();

    let hud = Arc::new(Hud::default());
    container.register_node(hud.clone()).unwrap();

    assert!(hud.base.clock.is_injected());
    assert!(hud.container.is_injected());
    assert!(hud.label.is_empty());
}
