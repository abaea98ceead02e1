//! Rendering and parsing throughput.
//!
//! Run with: cargo bench --package slack-codegen

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use slack_codegen::compute_hash;
use slack_codegen::render::ServiceGenerator;
use slack_codegen_core::{MethodInfo, NamespaceInfo, TypeText};
use slack_codegen_parser::parse_methods_file;
use std::fmt::Write as _;
use std::hint::black_box;

fn create_method(namespace: &str, index: usize) -> MethodInfo {
    let name = format!("method{index}");
    MethodInfo {
        api_path: format!("{namespace}.{name}"),
        args_type: TypeText::new(format!("Method{index}Arguments")),
        response_type: TypeText::new(format!("Method{index}Response")),
        is_optional_args: index % 2 == 0,
        description: Some(format!("Method number {index}.")),
        deprecated: index % 7 == 0,
        name,
    }
}

/// Builds `count` namespaces with one nested level each.
fn create_tree(count: usize, methods_per_namespace: usize) -> Vec<NamespaceInfo> {
    (0..count)
        .map(|i| {
            let name = format!("namespace{i}");
            let mut namespace = NamespaceInfo::new(&name);
            namespace.methods = (0..methods_per_namespace)
                .map(|m| create_method(&name, m))
                .collect();

            let nested_path = format!("{name}.nested");
            let mut nested = NamespaceInfo::new("nested");
            nested.methods = (0..methods_per_namespace)
                .map(|m| create_method(&nested_path, m))
                .collect();
            namespace.sub_namespaces.push(nested);

            namespace
        })
        .collect()
}

/// Declaration text with `count` namespaces of ten documented methods.
fn create_declaration(count: usize) -> String {
    let mut source = String::from("export declare abstract class Methods {\n");
    for i in 0..count {
        let _ = writeln!(source, "    readonly namespace{i}: {{");
        for m in 0..10 {
            let _ = writeln!(
                source,
                "        /**\n         * @description Method {m}.\n         */\n        method{m}: MethodWithRequiredArgument<Method{m}Arguments, Method{m}Response>;"
            );
        }
        source.push_str("    };\n");
    }
    source.push_str("}\n");
    source
}

fn bench_generate_all_files(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_all_files");
    let generator = ServiceGenerator::new().unwrap();

    for count in [1, 10, 50] {
        let tree = create_tree(count, 10);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &tree, |b, tree| {
            b.iter(|| generator.generate_all_files(black_box(tree)));
        });
    }

    group.finish();
}

fn bench_parse_methods_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_methods_file");

    for count in [1, 10, 50] {
        let source = create_declaration(count);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &source, |b, source| {
            b.iter(|| parse_methods_file(black_box(source)));
        });
    }

    group.finish();
}

fn bench_compute_hash(c: &mut Criterion) {
    let source = create_declaration(50);
    c.bench_function("compute_hash", |b| {
        b.iter(|| compute_hash(black_box(&source)));
    });
}

criterion_group!(
    benches,
    bench_generate_all_files,
    bench_parse_methods_file,
    bench_compute_hash
);
criterion_main!(benches);
