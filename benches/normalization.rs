use bodycheck::normalize::{NormalizeOptions, WhitespaceMode, normalize};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

const BASE_BODY: &str = r#"
<header>
  <h1>Order history</h1>
</header>
<main>
  <p>Tom&nbsp;&amp;&nbsp;Jerry &#40;account &#x23;42&#41;</p>
  <ul>
    <li class="row odd">Widget &lt;standard&gt;</li>
    <li class="row even">Gadget &lbrace;deluxe&rbrace;</li>
  </ul>
  <p>Delivery window:<br>Monday<br />Tuesday</p>
</main>
"#;

fn bench_normalize_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_modes");
    group.throughput(Throughput::Bytes(BASE_BODY.len() as u64));

    group.bench_function("flatten", |b| {
        let options = NormalizeOptions {
            whitespace: WhitespaceMode::Flatten,
        };
        b.iter(|| black_box(normalize(black_box(BASE_BODY), &options)));
    });
    group.bench_function("newlines", |b| {
        let options = NormalizeOptions {
            whitespace: WhitespaceMode::Newlines,
        };
        b.iter(|| black_box(normalize(black_box(BASE_BODY), &options)));
    });

    group.finish();
}

fn bench_normalize_scaled(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_scaled");
    let options = NormalizeOptions::default();

    for scale in [1usize, 5, 10, 25, 50] {
        let body = BASE_BODY.repeat(scale);
        group.throughput(Throughput::Bytes(body.len() as u64));
        group.bench_with_input(BenchmarkId::new("flatten", scale), &body, |b, body| {
            b.iter(|| black_box(normalize(black_box(body), &options)));
        });
    }

    group.finish();
}

fn bench_normalize_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_shapes");

    let entity_heavy = "&lt;td&gt;&#65;&#x42;&amp;&nbsp;".repeat(200);
    group.throughput(Throughput::Bytes(entity_heavy.len() as u64));
    group.bench_function("entity_heavy", |b| {
        let options = NormalizeOptions::default();
        b.iter(|| black_box(normalize(black_box(&entity_heavy), &options)));
    });

    let separator_heavy = "word \r\n\r\n <br /> \t word".repeat(200);
    group.throughput(Throughput::Bytes(separator_heavy.len() as u64));
    group.bench_function("separator_heavy", |b| {
        let options = NormalizeOptions::default();
        b.iter(|| black_box(normalize(black_box(&separator_heavy), &options)));
    });

    let plain = "already canonical text with no markup at all ".repeat(200);
    group.throughput(Throughput::Bytes(plain.len() as u64));
    group.bench_function("plain_passthrough", |b| {
        let options = NormalizeOptions::default();
        b.iter(|| black_box(normalize(black_box(&plain), &options)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_normalize_modes,
    bench_normalize_scaled,
    bench_normalize_shapes
);
criterion_main!(benches);
