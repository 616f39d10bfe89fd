pub mod m202503100001_create_users;
pub mod m202503100002_create_rayons;
pub mod m202503100003_create_products;
pub mod m202503100004_create_sales;
