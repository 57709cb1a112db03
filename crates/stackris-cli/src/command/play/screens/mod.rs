pub use self::session::SessionScreen;

mod session;
