mod astar;
