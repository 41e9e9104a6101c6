use component_macros::Injectable;
use di_abstractions::{Inject, Injectable};

#[derive(Default, Injectable)]
#[injectable(global)]
struct Clock;

#[derive(Injectable)]
#[injectable(global)]
struct Cached<T>
where
    T: Send + Sync + 'static,
{
    #[inject]
    clock: Inject<Clock>,
    value: T,
}

#[derive(Injectable)]
struct Pair(#[inject] Inject<Clock>, u8);

fn main() {
    let cached = Cached {
        clock: Inject::new(),
        value: 1_u64,
    };
    assert!(!cached.clock.is_injected());
    assert_eq!(cached.value, 1);
    assert!(Cached::<u64>::declared_capabilities().is_globally_injectable());

    let pair = Pair(Inject::new(), 2);
    assert_eq!(pair.1, 2);
}
