use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jss_compactor::compress;
use rand::{rngs::StdRng, Rng, SeedableRng};

const SNIPPETS: &[&str] = &[
    "/**\n * Returns the sum of two numbers.\n */\nfunction add ( a , b ) {\n    return a + b ;\n}\n",
    "var pattern = /[a-z\\/]+\\d*/gi ;   // matches paths\n",
    "if ( value !== undefined && value . length > 0 ) {\n    total = total / count - 1 ;\n}\n",
    "var message = \"Hello, \\\"world\\\" // not a comment\" ;\n",
    "const tpl = `line one ${ name } /* kept */` ;\n",
    "for ( var i = 0 ; i < items . length ; i ++ ) { sum += items [ i ] ; }\n",
];

fn generate_source(size_kb: usize) -> String {
    let mut rng = StdRng::seed_from_u64(42);
    let mut text = String::with_capacity(size_kb * 1024);
    while text.len() < size_kb * 1024 {
        text.push_str(SNIPPETS[rng.gen_range(0..SNIPPETS.len())]);
    }
    text
}

fn bench_compress(c: &mut Criterion) {
    for size in [1, 10, 100] {
        let source = generate_source(size);
        c.bench_function(&format!("compress_{size}kb"), |b| {
            b.iter(|| black_box(compress(black_box(&source)).unwrap()))
        });
    }
}

fn bench_compress_minified(c: &mut Criterion) {
    let minified = compress(&generate_source(100)).unwrap();
    c.bench_function("compress_minified_100kb", |b| {
        b.iter(|| black_box(compress(black_box(&minified)).unwrap()))
    });
}

criterion_group!(benches, bench_compress, bench_compress_minified);
criterion_main!(benches);
