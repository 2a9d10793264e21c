mod cat_file;
mod hash_object;
