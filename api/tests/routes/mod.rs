mod rayons_test;
mod sales_test;
mod statistics_test;
