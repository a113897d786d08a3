use gallivant::{Graph, Objective, TourKind};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // advent of code 2015 day 9 example: distances between three cities
    let mut routes = Graph::with_capacity(8);
    routes.add_named_edge("London", "Dublin", 464.0).unwrap();
    routes.add_named_edge("London", "Belfast", 518.0).unwrap();
    routes.add_named_edge("Dublin", "Belfast", 141.0).unwrap();

    print!("{routes}");

    let shortest = routes.best_tour_cost(Objective::Shortest, TourKind::Open);
    let longest = routes.best_tour_cost(Objective::Longest, TourKind::Open);
    assert_eq!(shortest, 605.0);
    assert_eq!(longest, 982.0);

    println!("shortest route: {shortest}");
    println!("longest route: {longest}");

    // advent of code 2015 day 13 example: net happiness around a dinner
    // table, accumulated from both directions of each pairing
    let mut table = Graph::with_capacity(20);
    for (from, to, happiness) in [
        ("Alice", "Bob", 54.0),
        ("Alice", "Carol", -79.0),
        ("Alice", "David", -2.0),
        ("Bob", "Alice", 83.0),
        ("Bob", "Carol", -7.0),
        ("Bob", "David", -63.0),
        ("Carol", "Alice", -62.0),
        ("Carol", "Bob", 60.0),
        ("Carol", "David", 55.0),
        ("David", "Alice", 46.0),
        ("David", "Bob", -7.0),
        ("David", "Carol", 41.0),
    ] {
        table.increment_named_edge(from, to, happiness).unwrap();
    }

    let happiest = table.best_tour_cost(Objective::Longest, TourKind::Closed);
    assert_eq!(happiest, 330.0);

    println!("happiest seating: {happiest}");
}
