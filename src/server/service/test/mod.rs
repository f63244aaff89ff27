mod app_user;
