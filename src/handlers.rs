pub mod health;
pub mod login;
pub mod register;

#[cfg(test)]
mod test;
