mod hash_map;
