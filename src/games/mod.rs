pub mod gomoku;

/// Metadata about a game
#[derive(Clone, Debug)]
pub struct GameInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Games shipped with this binary
pub fn get_all_games() -> Vec<GameInfo> {
    vec![GameInfo {
        id: "gomoku",
        name: "Gomoku",
        description: "Two players take turns, first to get exactly five in a row wins",
    }]
}

/// Get a game by ID
pub fn get_game(id: &str) -> Option<GameInfo> {
    get_all_games().into_iter().find(|g| g.id == id)
}
