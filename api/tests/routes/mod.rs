mod health_test;
mod sections;
