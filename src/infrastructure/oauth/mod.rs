pub mod spotify;

pub use spotify::SpotifyOAuthClient;
