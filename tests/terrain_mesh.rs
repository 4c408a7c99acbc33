use approx::assert_relative_eq;
use terramesh::math::{Point, Real, Vector};
use terramesh::mesh::DEFAULT_VERTICAL_SCALE;
use terramesh::{
    ColorRamp, ElevationGrid, MeshSink, TerrainMesh, TerrainMeshBuilder, TerrainMeshBuilderError,
    TerrainMeshFlags,
};

#[test]
fn flat_two_by_two_grid() {
    let grid = ElevationGrid::from_normalized(2, 2, vec![0.0; 4]).unwrap();
    let mesh = TerrainMeshBuilder::new(5.0).build(&grid).unwrap();

    assert_eq!(
        mesh.vertices(),
        &[
            Point::new(-1.0, 0.0, -1.0),
            Point::new(0.0, 0.0, -1.0),
            Point::new(-1.0, 0.0, 0.0),
            Point::new(0.0, 0.0, 0.0),
        ]
    );
    assert_eq!(mesh.colors(), &[ColorRamp::default().deep; 4]);
    assert_eq!(mesh.indices(), &[[0, 2, 1], [1, 2, 3]]);
    assert_eq!(mesh.flat_indices(), vec![0, 2, 1, 1, 2, 3]);
    assert!(mesh.normals().is_none());
}

#[test]
fn buffer_lengths_and_index_bounds() {
    let (width, height) = (5, 4);
    let samples: Vec<Real> = (0..width * height).map(|i| i as Real / 19.0).collect();
    let grid = ElevationGrid::from_normalized(width, height, samples).unwrap();
    let mesh = grid.to_terrain_mesh(5.0).unwrap();

    assert_eq!(mesh.num_vertices(), width * height);
    assert_eq!(mesh.colors().len(), width * height);
    assert_eq!(mesh.num_triangles(), 2 * (width - 1) * (height - 1));
    assert_eq!(mesh.flat_positions().len(), 3 * width * height);
    assert_eq!(mesh.flat_colors().len(), 4 * width * height);
    assert_eq!(mesh.flat_indices().len(), 6 * (width - 1) * (height - 1));

    for idx in mesh.flat_indices() {
        assert!((idx as usize) < width * height);
    }
}

#[test]
fn vertex_positions_follow_the_grid() {
    let grid = ElevationGrid::from_normalized(3, 2, vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]).unwrap();
    let mesh = grid.to_terrain_mesh(5.0).unwrap();

    for z in 0..2 {
        for x in 0..3 {
            let v = mesh.vertices()[z * 3 + x];
            assert_eq!(v.x, x as Real - 1.5);
            assert_eq!(v.z, z as Real - 1.0);
            assert_eq!(v.y, grid.sample(x, z) * 5.0);
        }
    }
}

#[test]
fn colors_follow_the_band_of_each_vertex() {
    let ramp = ColorRamp::default();
    let grid = ElevationGrid::from_normalized(
        4,
        2,
        vec![0.0, 0.10, 0.10000001, 0.50, 0.50000006, 0.80, 0.80000007, 1.0],
    )
    .unwrap();
    let mesh = grid.to_terrain_mesh(5.0).unwrap();

    assert_eq!(
        mesh.colors(),
        &[
            ramp.deep,
            ramp.deep,
            ramp.lowland,
            ramp.lowland,
            ramp.highland,
            ramp.highland,
            ramp.peak,
            ramp.peak,
        ]
    );

    for color in mesh.colors() {
        assert_eq!(color[3], 1.0);
    }
}

#[test]
fn build_is_deterministic() {
    let samples: Vec<Real> = (0..30).map(|i| (i as Real * 0.03) % 1.0).collect();
    let grid = ElevationGrid::from_normalized(6, 5, samples).unwrap();
    let builder =
        TerrainMeshBuilder::new(5.0).with_flags(TerrainMeshFlags::COMPUTE_NORMALS);

    assert_eq!(builder.build(&grid).unwrap(), builder.build(&grid).unwrap());
}

#[test]
fn degenerate_grids_are_rejected() {
    let row = ElevationGrid::from_normalized(3, 1, vec![0.5; 3]).unwrap();
    let column = ElevationGrid::from_normalized(1, 3, vec![0.5; 3]).unwrap();
    let empty = ElevationGrid::from_normalized(0, 0, vec![]).unwrap();

    assert_eq!(
        row.to_terrain_mesh(5.0),
        Err(TerrainMeshBuilderError::InvalidGrid {
            width: 3,
            height: 1
        })
    );
    assert_eq!(
        column.to_terrain_mesh(5.0),
        Err(TerrainMeshBuilderError::InvalidGrid {
            width: 1,
            height: 3
        })
    );
    assert!(empty.to_terrain_mesh(5.0).is_err());
}

#[test]
fn non_positive_scales_are_rejected() {
    let grid = ElevationGrid::from_normalized(2, 2, vec![0.5; 4]).unwrap();

    assert_eq!(
        TerrainMeshBuilder::new(0.0).build(&grid),
        Err(TerrainMeshBuilderError::InvalidScale(0.0))
    );
    assert_eq!(
        TerrainMeshBuilder::new(-1.0).build(&grid),
        Err(TerrainMeshBuilderError::InvalidScale(-1.0))
    );
    assert!(TerrainMeshBuilder::new(Real::NAN).build(&grid).is_err());
    assert!(TerrainMeshBuilder::new(Real::INFINITY).build(&grid).is_err());
}

#[test]
fn default_builder_uses_the_default_vertical_scale() {
    let grid = ElevationGrid::from_normalized(2, 2, vec![1.0; 4]).unwrap();
    let mesh = TerrainMeshBuilder::default().build(&grid).unwrap();

    assert_eq!(DEFAULT_VERTICAL_SCALE, 5.0);
    for v in mesh.vertices() {
        assert_eq!(v.y, DEFAULT_VERTICAL_SCALE);
    }
}

#[test]
fn requested_normals_are_unit_length_and_upward() {
    let grid = ElevationGrid::from_normalized(4, 4, vec![0.25; 16]).unwrap();
    let mesh = TerrainMeshBuilder::new(5.0)
        .with_flags(TerrainMeshFlags::COMPUTE_NORMALS)
        .build(&grid)
        .unwrap();

    let normals = mesh.normals().unwrap();
    assert_eq!(normals.len(), mesh.num_vertices());

    // A constant-elevation grid is a plane, so every smoothed normal is +y.
    for n in normals {
        assert_relative_eq!(*n, Vector::y(), epsilon = 1.0e-6);
    }
}

#[test]
fn custom_ramp_recolors_bands_without_moving_thresholds() {
    let ramp = ColorRamp {
        deep: [0.0, 0.0, 1.0, 1.0],
        ..ColorRamp::default()
    };
    let grid = ElevationGrid::from_normalized(2, 2, vec![0.05, 0.10, 0.2, 0.9]).unwrap();
    let mesh = TerrainMeshBuilder::new(5.0).with_ramp(ramp).build(&grid).unwrap();

    assert_eq!(mesh.colors()[0], [0.0, 0.0, 1.0, 1.0]);
    assert_eq!(mesh.colors()[1], [0.0, 0.0, 1.0, 1.0]);
    assert_eq!(mesh.colors()[2], ramp.lowland);
    assert_eq!(mesh.colors()[3], ramp.peak);
}

#[test]
fn random_grids_uphold_the_mesh_invariants() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..20 {
        let width = 2 + rng.rand_range(0..18) as usize;
        let height = 2 + rng.rand_range(0..18) as usize;
        let samples: Vec<Real> = (0..width * height).map(|_| rng.rand_float()).collect();

        let grid = ElevationGrid::from_normalized(width, height, samples).unwrap();
        let mesh = grid.to_terrain_mesh(5.0).unwrap();

        assert_eq!(mesh.num_vertices(), width * height);
        assert_eq!(mesh.colors().len(), width * height);
        assert_eq!(mesh.num_triangles(), 2 * (width - 1) * (height - 1));

        for tri in mesh.indices() {
            for idx in tri {
                assert!((*idx as usize) < width * height);
            }
        }

        for color in mesh.colors() {
            assert_eq!(color[3], 1.0);
        }
    }
}

struct RecordingSink {
    submitted: Vec<(usize, usize)>,
}

impl MeshSink for RecordingSink {
    type Error = ();

    fn submit_mesh(&mut self, mesh: &TerrainMesh) -> Result<(), ()> {
        self.submitted
            .push((mesh.num_vertices(), mesh.num_triangles()));
        Ok(())
    }
}

#[test]
fn meshes_flow_through_a_sink() {
    let grid = ElevationGrid::from_normalized(3, 3, vec![0.5; 9]).unwrap();
    let mesh = grid.to_terrain_mesh(5.0).unwrap();

    let mut sink = RecordingSink { submitted: vec![] };
    sink.submit_mesh(&mesh).unwrap();

    assert_eq!(sink.submitted, vec![(9, 8)]);
}
