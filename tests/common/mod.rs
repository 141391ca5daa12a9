//! Shared setup and teardown for the HTTP integration tests.

use std::sync::MutexGuard;

use blog_api::config::DatabaseUrl;
use blog_api::models::{Author, BlogPost, NewBlogPost};
use blog_api::{create_rocket, db, DbPool, DbPoolExt};
use rand::seq::SliceRandom;
use rand::Rng;
use rocket::local::blocking::Client;

const WORDS: &[&str] = &[
    "river", "signal", "lantern", "harbor", "copper", "meadow", "engine", "winter",
    "orbit", "canvas", "thread", "summit", "pocket", "ember", "glacier", "rhythm",
    "compass", "velvet", "anchor", "prairie", "cipher", "falcon", "marble", "tunnel",
];

const FIRST_NAMES: &[&str] = &["Ada", "Alan", "Barbara", "Dennis", "Edsger", "Frances", "Grace", "Ken"];
const LAST_NAMES: &[&str] = &["Lovelace", "Turing", "Liskov", "Ritchie", "Dijkstra", "Allen", "Hopper", "Thompson"];

fn words<R: Rng>(rng: &mut R, count: usize) -> String {
    (0..count)
        .map(|_| *WORDS.choose(rng).unwrap())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A random post for seeding: a short title, a few sentences, a random author.
pub fn fake_post() -> NewBlogPost {
    let mut rng = rand::thread_rng();
    let title_len = rng.gen_range(2..6);
    let sentences = rng.gen_range(1..4);
    let content = (0..sentences)
        .map(|_| {
            let len = rng.gen_range(4..12);
            format!("{}.", words(&mut rng, len))
        })
        .collect::<Vec<_>>()
        .join(" ");

    NewBlogPost {
        title: words(&mut rng, title_len),
        content,
        author: Author::new(
            *FIRST_NAMES.choose(&mut rng).unwrap(),
            *LAST_NAMES.choose(&mut rng).unwrap(),
        ),
    }
}

/// One running app on a private in-memory store. Dropping it clears the
/// store, so teardown runs even when a test panics.
pub struct TestApp {
    pub client: Client,
}

impl TestApp {
    pub fn start() -> Self {
        let conn = db::open(&DatabaseUrl::Memory).unwrap();
        let client = Client::tracked(create_rocket(conn)).unwrap();
        Self { client }
    }

    /// Starts the app and inserts `n` random posts straight into the store.
    pub fn seeded(n: usize) -> (Self, Vec<BlogPost>) {
        let app = Self::start();
        let posts = app.seed(n);
        (app, posts)
    }

    pub fn seed(&self, n: usize) -> Vec<BlogPost> {
        let conn = self.db();
        (0..n).map(|_| db::insert_post(&conn, &fake_post()).unwrap()).collect()
    }

    /// Direct handle on the store, bypassing HTTP.
    pub fn db(&self) -> MutexGuard<'_, rusqlite::Connection> {
        self.client.rocket().state::<DbPool>().expect("store is managed").conn()
    }

    pub fn find(&self, id: &str) -> Option<BlogPost> {
        db::find_post(&self.db(), id).unwrap()
    }

    pub fn count(&self) -> usize {
        db::count_posts(&self.db()).unwrap()
    }

    /// Any stored post.
    pub fn any_post(&self) -> BlogPost {
        db::list_posts(&self.db()).unwrap().into_iter().next().expect("store has posts")
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(pool) = self.client.rocket().state::<DbPool>() {
            db::drop_all(&pool.conn()).ok();
        }
    }
}
