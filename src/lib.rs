pub mod api;
pub mod html;
pub mod models;

#[cfg(test)]
mod test;
