mod health_test;
mod refs_test;
