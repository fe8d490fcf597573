#[cfg(test)]
pub mod test_graph {
    use crate::graph::GraphStore;

    pub fn create_scenario_graph() -> GraphStore {
        GraphStore::build([
            ("Bangalore", "Chennai", 350.0),
            ("Chennai", "Hyderabad", 500.0),
            ("Bangalore", "Hyderabad", 600.0),
            ("Hyderabad", "Mumbai", 700.0),
            ("Mumbai", "Delhi", 1400.0),
            ("Chennai", "Kolkata", 1600.0),
            ("Kolkata", "Delhi", 1500.0),
        ])
        .unwrap()
    }

    // https://user-images.githubusercontent.com/43790152/97784960-1a142580-1bc4-11eb-9070-39c03eb16df2.png
    fn get_romania_graph_edges() -> Vec<(&'static str, &'static str, f64)> {
        vec![
            ("Oradea", "Zerind", 71.0),
            ("Oradea", "Sibiu", 151.0),
            ("Zerind", "Arad", 75.0),
            ("Arad", "Sibiu", 140.0),
            ("Arad", "Timisoara", 118.0),
            ("Timisoara", "Lugoj", 111.0),
            ("Lugoj", "Mehadia", 70.0),
            ("Mehadia", "Dobreta", 75.0),
            ("Dobreta", "Craiova", 120.0),
            ("Craiova", "RimnicuVilcea", 146.0),
            ("Craiova", "Pitesti", 138.0),
            ("RimnicuVilcea", "Pitesti", 97.0),
            ("RimnicuVilcea", "Sibiu", 80.0),
            ("Sibiu", "Fagaras", 99.0),
            ("Fagaras", "Bucharest", 211.0),
            ("Pitesti", "Bucharest", 101.0),
            ("Bucharest", "Giurgiu", 90.0),
            ("Bucharest", "Urziceni", 85.0),
            ("Urziceni", "Hirsova", 98.0),
            ("Hirsova", "Eforie", 86.0),
            ("Urziceni", "Vaslui", 142.0),
            ("Vaslui", "Iasi", 92.0),
            ("Iasi", "Neamt", 87.0),
        ]
    }

    pub fn create_romania_graph() -> GraphStore {
        GraphStore::build(get_romania_graph_edges()).unwrap()
    }

    /// Two components: a triangle and a separate pair.
    pub fn create_disconnected_graph() -> GraphStore {
        GraphStore::build([
            ("A", "B", 1.0),
            ("B", "C", 1.0),
            ("C", "A", 3.0),
            ("X", "Y", 2.0),
        ])
        .unwrap()
    }
}
