use armature::api::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;
use std::sync::Arc;

struct Cog;

impl Construct for Cog {
    fn construct(_wiring: &mut Wiring<'_>) -> Result<Self, CoreError> {
        Ok(Cog)
    }
}

struct Machine {
    _app: App,
    _cog: Cog,
}

impl Construct for Machine {
    fn construct(wiring: &mut Wiring<'_>) -> Result<Self, CoreError> {
        Ok(Machine {
            _app: wiring.app(),
            _cog: wiring.make()?,
        })
    }
}

fn benchmark_routing(c: &mut Criterion) {
    let mut group = c.benchmark_group("routing");

    let app = App::new();
    app.request().unwrap().feed(
        HttpMethod::GET,
        "/users/123/posts/456",
        RequestBody::Empty,
    );
    let router = app.router().unwrap();
    for i in 0..100 {
        router
            .add(
                HttpMethod::GET,
                &format!("/api/v{i}/items/{{item_id}}"),
                ActionSpec::new("Items", "show"),
            )
            .unwrap();
    }
    router
        .add(
            HttpMethod::GET,
            "/users/{user_id}/posts/{post_id}",
            ActionSpec::new("Posts", "show"),
        )
        .unwrap();

    group.bench_function("get_action", |b| {
        b.iter(|| {
            let action = router.get_action(black_box("/users/123/posts/456"));
            black_box(action)
        });
    });

    group.bench_function("parse_route_pattern", |b| {
        b.iter(|| {
            let route = parse_route_pattern(
                black_box("/api/v1/items/{item_id}/details"),
                HttpMethod::POST,
                ActionSpec::new("Items", "update"),
            );
            black_box(route)
        });
    });

    group.finish();
}

fn benchmark_container(c: &mut Criterion) {
    let mut group = c.benchmark_group("container");

    let app = App::new();
    app.register(|_: &App| Arc::new(Cog));
    app.resolve::<Cog>().unwrap();

    group.bench_function("resolve_memoized", |b| {
        b.iter(|| {
            let cog = app.resolve::<Cog>();
            black_box(cog)
        });
    });

    group.finish();
}

fn benchmark_auto_wiring(c: &mut Criterion) {
    let mut group = c.benchmark_group("auto_wiring");

    let app = App::new();

    group.bench_function("make_leaf", |b| {
        b.iter(|| {
            let cog = app.make::<Cog>();
            black_box(cog)
        });
    });

    group.bench_function("make_wired_graph", |b| {
        b.iter(|| {
            let machine = app.make::<Machine>();
            black_box(machine)
        });
    });

    group.finish();
}

fn benchmark_response_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("response");

    let small = json!({"status": "ok", "data": {"id": 123}});
    let mut items = Vec::new();
    for i in 0..1000 {
        items.push(json!({"id": i, "name": format!("Item {i}")}));
    }
    let large = json!({ "items": items });

    group.bench_function("serialize_small", |b| {
        b.iter(|| {
            let bytes = serialize_response_body(&ResponseBody::Json(black_box(small.clone())));
            black_box(bytes)
        });
    });

    group.bench_function("serialize_large", |b| {
        b.iter(|| {
            let bytes = serialize_response_body(&ResponseBody::Json(black_box(large.clone())));
            black_box(bytes)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_routing,
    benchmark_container,
    benchmark_auto_wiring,
    benchmark_response_serialization
);
criterion_main!(benches);
