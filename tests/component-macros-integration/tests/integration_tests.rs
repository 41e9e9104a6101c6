//! 派生宏与容器的集中集成测试

use component_macros::Injectable;
use di_abstractions::{Capabilities, DiContainer, Inject, Injectable, NodeRef};
use di_impl::{DiContainerImpl, SceneGraph};
use std::sync::Arc;

#[derive(Debug, Default, Injectable)]
#[injectable(global)]
pub struct InputService;

#[derive(Debug, Default, Injectable)]
#[injectable(global)]
pub struct SoundService;

/// 通过嵌入获得依赖的基础组件
#[derive(Debug, Default, Injectable)]
pub struct Behaviour {
    #[inject]
    input: Inject<InputService>,
}

#[derive(Debug, Default, Injectable)]
#[injectable(node)]
pub struct PlayerController {
    #[inject(flatten)]
    behaviour: Behaviour,
    #[inject]
    sound: Inject<SoundService>,
}

#[derive(Debug, Default, Injectable)]
#[injectable(node, cascade)]
pub struct LevelRoot {
    #[inject]
    sound: Inject<SoundService>,
}

fn container_with_services(scene: Arc<SceneGraph>) -> DiContainerImpl {
    let container = DiContainerImpl::with_host(scene);
    container.register(Arc::new(InputService)).unwrap();
    container.register(Arc::new(SoundService)).unwrap();
    container
}

#[test]
fn test_flattened_fields_are_injected() {
    let container = container_with_services(Arc::new(SceneGraph::new()));
    let controller = Arc::new(PlayerController::default());

    container.register_node(controller.clone()).unwrap();

    assert!(controller.behaviour.input.is_injected());
    assert!(controller.sound.is_injected());
    assert!(Arc::ptr_eq(
        &container.resolve::<PlayerController>().unwrap(),
        &controller
    ));
}

#[test]
fn test_derived_capabilities_drive_classification() {
    let container = container_with_services(Arc::new(SceneGraph::new()));
    let behaviour = Arc::new(Behaviour::default());

    container.register(behaviour.clone()).unwrap();

    assert!(behaviour.input.is_injected());
    assert!(!container.is_registered::<Behaviour>());
    assert!(LevelRoot::declared_capabilities().contains(Capabilities::CASCADE));
}

#[test]
fn test_cascade_from_derived_root() {
    let scene = Arc::new(SceneGraph::new());
    let container = container_with_services(scene.clone());
    let root = Arc::new(LevelRoot::default());
    let controller = Arc::new(PlayerController::default());
    let root_id = scene.add_root(root.clone());
    scene.add_child(root_id, controller.clone());

    container.inject(&root).unwrap();

    assert!(root.sound.is_injected());
    assert!(controller.behaviour.input.is_injected());
    let root_node: NodeRef = root;
    assert_eq!(container.collect_injectable_descendants(&root_node).len(), 1);
}
