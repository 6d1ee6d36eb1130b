use criterion::{
    Criterion,
    criterion_group,
    criterion_main
};
use dfs_mazes::cells::Cell;
use dfs_mazes::grid_dimensions::GridDimensions;
use dfs_mazes::pathing;
use dfs_mazes::session::MazeSession;
use dfs_mazes::units::{ColumnsCount, RowsCount};

fn large_maze() -> MazeSession {
    let dimensions = GridDimensions::new(ColumnsCount(351), RowsCount(351)).unwrap();
    let mut session = MazeSession::from_seed(dimensions, 351);
    session.generate_with(|_| ());
    session
}

fn bench_dfs_path(c: &mut Criterion) {
    c.bench_function("dfs_path", |b| {
        let session = large_maze();
        let start = session.start();
        let end = session.grid().open_cells().next().unwrap_or(start);
        b.iter(|| pathing::dfs_path(session.grid(), start, end))
    });
}

fn bench_solve(c: &mut Criterion) {
    c.bench_function("solve", |b| {
        let mut session = large_maze();
        let far_corner = Cell::new(350, 350);
        let end = if session.grid().is_open(far_corner) {
            far_corner
        } else {
            session.start()
        };
        session.set_end(end);
        b.iter(|| session.solve())
    });
}

criterion_group!(benches,
    bench_dfs_path,
    bench_solve
);
criterion_main!(benches);
