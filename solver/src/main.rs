use fillomino::builder::SquareBoardBuilder;
use fillomino::Location;

fn main() {
    let mut board = SquareBoardBuilder::with_dims((4, 4))
        .add_clue(Location(0, 0), 2)
        .add_clue(Location(3, 0), 3)
        .add_clue(Location(0, 1), 1)
        .add_clue(Location(2, 2), 5)
        .add_clue(Location(1, 3), 4)
        .add_clue(Location(3, 3), 1)
        .build()
        .unwrap();

    println!("{}", board);

    board.solve().unwrap();
    let order = board.check_solution().unwrap();

    println!("{}", board);
    println!("validated {} cells starting from {}", order.len(), order[0]);
}
