
mod test_migration;
mod test_swap;
