//! Session banner

/// Greeting shown when an interactive session starts
pub const BANNER: &str = "Welcome to the world of 'dumbcrypt,' where cryptography meets comedy!
    We're combining Affine Cipher with Caesar Cipher to create a code
    so 'dumb,' it's brilliant.
    Remember, in 'dumbcrypt,' spaces are as rare as a unicorn wearing a top hat!
    Let's dive into this cryptographic comedy adventure!";

const BORDER_WIDTH: usize = 50;

/// Frame `message` between two rows of asterisks, followed by a blank line
pub fn format_banner(message: &str) -> String {
    let border = "*".repeat(BORDER_WIDTH);
    format!("{border}\n* {message} *\n{border}\n\n")
}
