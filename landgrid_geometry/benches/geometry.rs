use criterion::{Criterion, criterion_group, criterion_main};
use landgrid_geometry::{
	GeoCollection, GeoFeature, Geometry, PolygonGeometry, RingGeometry, SampleOptions,
	locate::locate, mask::world_mask, sample::sample_collection,
};
use rand::{SeedableRng, rngs::StdRng};
use std::hint::black_box;

/// Checkerboard of square regions, roughly what a continent of provinces
/// looks like to the sampler.
fn grid_collection(cells: usize) -> GeoCollection {
	let mut features = Vec::new();
	for ix in 0..cells {
		for iy in 0..cells {
			if (ix + iy) % 2 == 0 {
				continue;
			}
			let x0 = ix as f64 * 4.0;
			let y0 = iy as f64 * 4.0;
			let ring = RingGeometry::from(&[
				[x0, y0],
				[x0 + 3.0, y0],
				[x0 + 3.0, y0 + 3.0],
				[x0, y0 + 3.0],
				[x0, y0],
			]);
			let mut feature = GeoFeature::new(Geometry::Polygon(PolygonGeometry(vec![ring])));
			feature.properties.insert("stateKey", format!("cell_{ix}_{iy}"));
			features.push(feature);
		}
	}
	GeoCollection::from(features)
}

fn bench_sample(c: &mut Criterion) {
	c.bench_function("sample 2000 points over a 32-cell grid", |b| {
		let collection = grid_collection(8);
		let options = SampleOptions {
			total_points: 2000,
			min_points_per_polygon: 12,
		};
		b.iter(|| {
			let mut rng = StdRng::seed_from_u64(42);
			black_box(sample_collection(&collection, &options, &mut rng))
		})
	});
}

fn bench_locate(c: &mut Criterion) {
	c.bench_function("locate 1024 probes over a 32-cell grid", |b| {
		let collection = grid_collection(8);
		b.iter(|| {
			for i in 0..32 {
				for j in 0..32 {
					black_box(locate(&collection, i as f64, j as f64));
				}
			}
		})
	});
}

fn bench_mask(c: &mut Criterion) {
	c.bench_function("world mask over a 32-cell grid", |b| {
		let collection = grid_collection(8);
		b.iter(|| black_box(world_mask(&collection)))
	});
}

criterion_group!(
	name = benches;
	config = Criterion::default().significance_level(0.1).sample_size(10);
	targets = bench_sample, bench_locate, bench_mask
);
criterion_main!(benches);
