// Starting contents of the in-memory collections

use chrono::NaiveDate;

use crate::entity::categories;
use crate::models::{Author, Book, Game, NoteData};

fn game(id: u32, title: &str, platform: &str, year: i32, is_favorite: bool) -> Game {
    Game {
        id,
        title: title.to_string(),
        platform: platform.to_string(),
        year,
        is_favorite,
    }
}

pub fn games() -> Vec<Game> {
    vec![
        game(1, "The Legend of Zelda: Breath of the Wild", "Switch", 2017, true),
        game(2, "Super Mario Bros.", "NES", 1985, true),
        game(3, "Half-Life", "PC", 1998, false),
        game(4, "Hades", "PC", 2020, true),
        game(5, "Pac-Man", "Arcade", 1980, false),
        game(6, "Stardew Valley", "PC", 2016, false),
    ]
}

#[allow(clippy::too_many_arguments)]
fn book(
    id: u32,
    title: &str,
    author: &str,
    year: i32,
    genre: &str,
    price: f64,
    in_stock: bool,
    rating: f64,
) -> Book {
    Book {
        id,
        title: title.to_string(),
        author: author.to_string(),
        year,
        genre: genre.to_string(),
        price,
        in_stock,
        rating,
    }
}

pub fn books() -> Vec<Book> {
    vec![
        book(1, "Dune", "Frank Herbert", 1965, "Science Fiction", 9.99, true, 4.6),
        book(2, "The Hobbit", "J.R.R. Tolkien", 1937, "Fantasy", 12.5, true, 4.8),
        book(3, "Neuromancer", "William Gibson", 1984, "Science Fiction", 8.75, false, 4.1),
        book(4, "The Left Hand of Darkness", "Ursula K. Le Guin", 1969, "Science Fiction", 11.0, true, 4.3),
        book(5, "One Hundred Years of Solitude", "Gabriel García Márquez", 1967, "Literary Fiction", 14.2, false, 4.7),
        book(6, "The Name of the Wind", "Patrick Rothfuss", 2007, "Fantasy", 10.99, true, 4.5),
    ]
}

fn author(id: u32, first_name: &str, last_name: &str, nationality: &str, birth_year: Option<i32>) -> Author {
    Author {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        nationality: nationality.to_string(),
        birth_year,
    }
}

pub fn authors() -> Vec<Author> {
    vec![
        author(1, "Frank", "Herbert", "American", Some(1920)),
        author(2, "J.R.R.", "Tolkien", "British", Some(1892)),
        author(3, "Ursula K.", "Le Guin", "American", Some(1929)),
        author(4, "Gabriel", "García Márquez", "Colombian", Some(1927)),
        author(5, "Patrick", "Rothfuss", "American", None),
    ]
}

fn category(id: i32, name: &str, description: Option<&str>) -> categories::Model {
    categories::Model {
        id,
        name: name.to_string(),
        description: description.map(str::to_string),
    }
}

pub fn categories() -> Vec<categories::Model> {
    vec![
        category(1, "Work", Some("Meetings, deadlines and follow-ups")),
        category(2, "Personal", Some("Errands and reminders")),
        category(3, "Ideas", None),
    ]
}

fn note(
    id: i32,
    title: &str,
    content: &str,
    color: &str,
    date: (i32, u32, u32),
    is_favorite: bool,
    category_id: Option<i32>,
) -> NoteData {
    let (year, month, day) = date;
    NoteData {
        id,
        title: title.to_string(),
        color: color.to_string(),
        content: content.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        is_favorite,
        category_id,
    }
}

pub fn notes() -> Vec<NoteData> {
    vec![
        note(1, "Sprint planning", "Collect estimates before Thursday", "blue", (2025, 3, 3), true, Some(1)),
        note(2, "Quarterly report", "Draft the summary section", "red", (2025, 2, 28), false, Some(1)),
        note(3, "Groceries", "Eggs, coffee, oat milk", "green", (2025, 3, 4), false, Some(2)),
        note(4, "Side project", "Try a CLI for tracking reading lists", "yellow", (2025, 2, 23), true, Some(3)),
        note(5, "Loose thought", "Notes without a category stay here", "red", (2025, 3, 5), false, None),
    ]
}
