//! 依赖注入容器的集中集成测试

use component_macros::Injectable;
use di_abstractions::{
    CandidateType, Capabilities, Capability, Category, ContainerConfig, ContainerLifecycle,
    DependencyResolver, DependencyResult, DiContainer, Inject, Injectable, NodeRef,
};
use di_impl::{DiContainerImpl, SceneGraph};
use infrastructure_common::DependencyError;
use std::any::Any;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

fn scene_container() -> (Arc<SceneGraph>, DiContainerImpl) {
    init_tracing();
    let scene = Arc::new(SceneGraph::new());
    let container = DiContainerImpl::with_host(scene.clone());
    (scene, container)
}

/// 没有任何能力声明的对象
#[derive(Debug, Default, Injectable)]
struct Settings;

/// 依赖 `Settings` 的对象
#[derive(Debug, Default, Injectable)]
struct Renderer {
    #[inject]
    settings: Inject<Settings>,
}

/// 全局可注入的服务
#[derive(Debug, Default, Injectable)]
#[injectable(global)]
struct Physics;

/// 依赖全局服务的树节点
#[derive(Debug, Default, Clone, Injectable)]
#[injectable(node)]
struct Body {
    #[inject]
    physics: Inject<Physics>,
}

/// 依赖树节点 `Body` 的全局服务
#[derive(Debug, Default, Injectable)]
#[injectable(global)]
struct Tracker {
    #[inject]
    body: Inject<Body>,
}

/// 记录注入次数的节点，能力在构造时指定
#[derive(Debug)]
struct Counted {
    capabilities: Capabilities,
    injections: AtomicUsize,
}

impl Counted {
    fn new(capabilities: Capabilities) -> Arc<Self> {
        Arc::new(Self {
            capabilities,
            injections: AtomicUsize::new(0),
        })
    }

    fn injections(&self) -> usize {
        self.injections.load(Ordering::SeqCst)
    }
}

impl Injectable for Counted {
    fn declared_capabilities() -> Capabilities {
        Capabilities::NONE
    }

    fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    fn inject_dependencies(
        &self,
        _resolver: &dyn DependencyResolver,
    ) -> DependencyResult<()> {
        self.injections.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

/// 没有默认构造方式的全局类型
#[derive(Debug, Injectable)]
#[injectable(global)]
struct Database {
    url: String,
}

#[test]
fn test_resolve_after_register_is_stable() {
    let (_, container) = scene_container();
    let physics = Arc::new(Physics);

    container.register(physics.clone()).unwrap();

    for _ in 0..3 {
        assert!(Arc::ptr_eq(&container.resolve::<Physics>().unwrap(), &physics));
    }
}

#[test]
fn test_first_registration_wins() {
    let (_, container) = scene_container();
    let first = Arc::new(Physics);
    let second = Arc::new(Physics);

    container.register(first.clone()).unwrap();
    container.register(second).unwrap();

    assert!(Arc::ptr_eq(&container.resolve::<Physics>().unwrap(), &first));
}

#[test]
fn test_unregistered_type_resolves_to_none() {
    let (_, container) = scene_container();

    assert!(container.resolve::<Physics>().is_none());
    assert_eq!(container.lifecycle(), ContainerLifecycle::Uninitialized);
}

#[test]
fn test_fresh_container_resolves_to_itself() {
    let (_, container) = scene_container();

    let resolved = container.resolve::<DiContainerImpl>().unwrap();

    assert!(resolved.ptr_eq(&container));
    let components = container.registered_components();
    assert_eq!(components.len(), 1);
    assert!(components[0].type_info.is::<DiContainerImpl>());
}

#[test]
fn test_unmarked_object_is_injected_but_not_resolvable() {
    let (_, container) = scene_container();
    let settings = Arc::new(Settings);
    let renderer = Arc::new(Renderer::default());

    container.register(settings).unwrap();
    let error = container.register(renderer.clone()).unwrap_err();

    // 未声明全局可注入的对象不会进入注册表
    assert!(container.resolve::<Settings>().is_none());
    assert!(matches!(error, DependencyError::MissingDependency { .. }));
    assert_eq!(error.type_name(), std::any::type_name::<Settings>());
    assert!(!renderer.settings.is_injected());
}

#[test]
fn test_register_fills_field_with_registered_instance() {
    let (_, container) = scene_container();
    let physics = Arc::new(Physics);
    let body = Arc::new(Body::default());

    container.register(physics.clone()).unwrap();
    container.register_node(body.clone()).unwrap();

    assert!(Arc::ptr_eq(&body.physics.get().unwrap(), &physics));
    assert!(Arc::ptr_eq(&container.resolve::<Body>().unwrap(), &body));
}

#[test]
fn test_tree_nodes_resolve_after_plain_entries() {
    let (_, container) = scene_container();
    container.register(Arc::new(Physics)).unwrap();
    container.register_node(Arc::new(Body::default())).unwrap();

    let categories: Vec<Category> = container
        .registered_components()
        .into_iter()
        .map(|component| component.category)
        .collect();

    assert_eq!(
        categories,
        vec![Category::Plain, Category::Plain, Category::TreeNode]
    );
}

#[test]
fn test_no_marked_fields_is_noop() {
    let (_, container) = scene_container();
    let settings = Arc::new(Settings);

    container.inject(&settings).unwrap();

    assert_eq!(container.stats().injections_performed, 1);
    assert!(!container.is_registered::<Settings>());
}

#[test]
fn test_cascade_is_single_level() {
    let (scene, container) = scene_container();
    let root = Counted::new(Capabilities::CASCADE);
    let shallow = Counted::new(Capabilities::TREE_NODE);
    let nested = Counted::new(Capabilities::TREE_NODE.with(Capability::CascadesIntoChildren));
    let deep = Counted::new(Capabilities::TREE_NODE);

    let root_id = scene.add_root(root.clone());
    scene.add_child(root_id, shallow.clone());
    let nested_id = scene.add_child(root_id, nested.clone());
    scene.add_child(nested_id, deep.clone());

    container.inject(&root).unwrap();

    assert_eq!(root.injections(), 1);
    assert_eq!(shallow.injections(), 1);
    assert_eq!(nested.injections(), 1);
    // 嵌套的级联节点不会再次展开，深层节点只注入一次
    assert_eq!(deep.injections(), 1);
    assert_eq!(container.stats().cascade_passes, 1);
}

#[test]
fn test_cascade_terminates_when_root_is_re_added_below_child() {
    let (scene, container) = scene_container();
    let root = Counted::new(Capabilities::CASCADE | Capabilities::TREE_NODE);
    let child = Counted::new(Capabilities::TREE_NODE);
    let root_id = scene.add_root(root.clone());
    let child_id = scene.add_child(root_id, child.clone());
    scene.add_child(child_id, root.clone());

    container.inject(&root).unwrap();

    assert_eq!(root.injections(), 1);
    assert_eq!(child.injections(), 1);
    assert_eq!(scene.len(), 2);
}

#[test]
fn test_cascade_skips_children_without_tree_node_capability() {
    let (scene, container) = scene_container();
    let root = Counted::new(Capabilities::CASCADE);
    let plain_child = Counted::new(Capabilities::NONE);
    let root_id = scene.add_root(root.clone());
    scene.add_child(root_id, plain_child.clone());

    container.inject(&root).unwrap();

    assert_eq!(plain_child.injections(), 0);
}

#[test]
fn test_discover_and_bind_all_wires_nodes_to_globals() -> anyhow::Result<()> {
    let (scene, container) = scene_container();
    scene.add_candidate(CandidateType::of::<Physics>());
    let body = Arc::new(Body::default());
    scene.add_root(body.clone());

    let report = container.discover_and_bind_all()?;

    let physics = container.resolve::<Physics>().expect("发现阶段应注册 Physics");
    assert!(Arc::ptr_eq(&body.physics.require()?, &physics));
    assert_eq!(report.plain_registered, 1);
    assert_eq!(report.tree_nodes_registered, 1);
    assert_eq!(container.lifecycle(), ContainerLifecycle::Bound);
    Ok(())
}

#[test]
fn test_discover_registers_everything_before_injecting() -> anyhow::Result<()> {
    let (scene, container) = scene_container();
    // Tracker 的依赖来自节点阶段，仍然可以满足
    scene.add_candidate(CandidateType::of::<Tracker>());
    scene.add_candidate(CandidateType::of::<Physics>());
    let body = Arc::new(Body::default());
    scene.add_root(body.clone());

    container.discover_and_bind_all()?;

    let tracker = container.resolve::<Tracker>().expect("Tracker 已注册");
    assert!(Arc::ptr_eq(&tracker.body.require()?, &body));
    Ok(())
}

#[test]
fn test_discover_skips_unconstructible_candidates() {
    let (scene, container) = scene_container();
    scene.add_candidate(CandidateType::with_factory::<Database, _>(|| None));
    scene.add_candidate(CandidateType::of::<Settings>());

    let report = container.discover_and_bind_all().unwrap();

    assert_eq!(report.skipped_candidates, 1);
    assert_eq!(report.plain_registered, 0);
    assert!(container.resolve::<Database>().is_none());
    assert!(container.resolve::<Settings>().is_none());
    assert_eq!(container.stats().skipped_candidates, 1);
}

#[test]
fn test_discover_uses_custom_factory() {
    let (scene, container) = scene_container();
    scene.add_candidate(CandidateType::with_factory(|| {
        Some(Arc::new(Database {
            url: "memory://".to_string(),
        }))
    }));

    container.discover_and_bind_all().unwrap();

    assert_eq!(container.resolve::<Database>().unwrap().url, "memory://");
}

#[test]
fn test_discover_runs_deferred_cascades() {
    let (scene, container) = scene_container();
    let root = Counted::new(Capabilities::CASCADE);
    let child = Counted::new(Capabilities::TREE_NODE);
    let root_id = scene.add_root(root.clone());
    scene.add_child(root_id, child.clone());

    let report = container.discover_and_bind_all().unwrap();

    assert_eq!(report.deferred_cascades, 1);
    assert_eq!(root.injections(), 1);
    // 子节点先作为注册表条目注入，再由级联注入一次
    assert_eq!(child.injections(), 2);
}

#[test]
fn test_discover_fails_fast_on_missing_dependency() {
    let (scene, container) = scene_container();
    scene.add_root(Arc::new(Body::default()));

    let error = container.discover_and_bind_all().unwrap_err();

    assert!(error.type_name().ends_with("Physics"));
}

#[test]
fn test_instantiate_and_inject_spawns_under_parent() {
    let (scene, container) = scene_container();
    scene.register_prototype::<Body>();
    container.register(Arc::new(Physics)).unwrap();
    let parent: NodeRef = Counted::new(Capabilities::NONE);
    let parent_id = scene.add_root(parent.clone());
    let prototype = Arc::new(Body::default());

    let spawned = container
        .instantiate_and_inject(&prototype, Some(&parent))
        .unwrap();

    assert!(!Arc::ptr_eq(&spawned, &prototype));
    assert!(spawned.physics.is_injected());
    assert!(!prototype.physics.is_injected());
    let spawned_node: NodeRef = spawned;
    assert_eq!(scene.parent_of(&spawned_node), Some(parent_id));
}

#[test]
fn test_instantiate_unknown_prototype_fails() {
    let (_, container) = scene_container();
    let prototype = Arc::new(Body::default());

    let error = container.instantiate_and_inject(&prototype, None).unwrap_err();

    assert!(matches!(error, DependencyError::InstantiationFailed { .. }));
}

#[test]
fn test_config_name_is_kept() {
    let container = DiContainerImpl::with_config(
        Arc::new(SceneGraph::new()),
        ContainerConfig {
            name: "scene".to_string(),
            report_skipped_candidates: true,
        },
    );

    assert_eq!(container.config().name, "scene");
}

#[test]
fn test_container_is_shared_across_threads() {
    let (_, container) = scene_container();
    let physics = Arc::new(Physics);
    container.register(physics.clone()).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let container = container.clone();
            std::thread::spawn(move || container.resolve::<Physics>())
        })
        .collect();

    for handle in handles {
        let resolved = handle.join().unwrap().unwrap();
        assert!(Arc::ptr_eq(&resolved, &physics));
    }
}
