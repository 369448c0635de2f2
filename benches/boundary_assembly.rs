//! Benchmark: boundary-integral assembly throughput
//!
//! Measures flux-residual assembly and radiated-power monitoring over a
//! strip of annular Q1 cells.
//!
//! Run with:
//!   cargo bench --bench boundary_assembly

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use axifem::basis::PolynomialDegree;
use axifem::boundary::{FluxElement, PowerMonitorElement, total_radiated_power};
use axifem::element::{Face, QFourierHelmholtzElement};
use axifem::mesh::NodeStore;
use ndarray::Array1;
use num_complex::Complex64;

/// Strip of `n` Q1 cells along r in [1, n+1], z in [0, 1]
fn build_strip(n: usize) -> (Vec<QFourierHelmholtzElement>, NodeStore) {
    let mut nodes = NodeStore::new();
    let mut bottoms = Vec::with_capacity(n + 1);
    let mut tops = Vec::with_capacity(n + 1);
    for i in 0..=n {
        let r = 1.0 + i as f64;
        bottoms.push(nodes.add_node([r, 0.0], 2));
        tops.push(nodes.add_node([r, 1.0], 2));
    }
    for node in 0..nodes.num_nodes() {
        let [r, z] = nodes.position(node);
        nodes.set_value(node, 0, r);
        nodes.set_value(node, 1, z);
    }
    nodes.assign_eqn_numbers();

    let elems = (0..n)
        .map(|i| {
            QFourierHelmholtzElement::new(
                PolynomialDegree::P1,
                vec![bottoms[i], bottoms[i + 1], tops[i], tops[i + 1]],
            )
        })
        .collect();
    (elems, nodes)
}

fn bench_flux_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("flux_assembly");

    for &n in &[64usize, 512, 4096] {
        let (elems, nodes) = build_strip(n);
        let ndof = 4 * (n + 1);

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let mut residuals = Array1::zeros(ndof);
                for elem in &elems {
                    let mut flux = FluxElement::attach(elem, Face::S1Min).unwrap();
                    flux.set_flux_fn(|r, _z| Complex64::new(r, -r));
                    flux.accumulate_residual(&nodes, &mut residuals);
                }
                black_box(residuals)
            })
        });
    }

    group.finish();
}

fn bench_power_monitoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("power_monitoring");

    for &n in &[64usize, 512, 4096] {
        let (elems, nodes) = build_strip(n);
        let monitors: Vec<_> = elems
            .iter()
            .map(|e| PowerMonitorElement::attach(e, Face::S1Min).unwrap())
            .collect();

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(total_radiated_power(&monitors, &nodes)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_flux_assembly, bench_power_monitoring);
criterion_main!(benches);
