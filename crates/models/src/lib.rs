pub mod db;
pub mod errors;
pub mod song;

#[cfg(test)]
mod tests;
